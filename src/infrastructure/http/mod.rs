use std::time::Duration;

const USER_AGENT: &str = concat!("en2ru-speech/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the outbound API clients.
/// Without a timeout the transport default applies.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
