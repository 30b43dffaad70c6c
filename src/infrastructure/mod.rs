pub mod config;
pub mod http;
pub mod output;
pub mod repositories;
pub mod speaker;
