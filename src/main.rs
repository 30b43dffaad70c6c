use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use en2ru_speech::controllers::cli::{parse_args, report, CliController, ParsedArgs};
use en2ru_speech::error::{AppError, AppResult};
use en2ru_speech::infrastructure::config::{Config, ConfigError, LogFormat};
use en2ru_speech::infrastructure::http::build_http_client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let args = match parse_args(std::env::args_os()) {
        Ok(ParsedArgs::Run(args)) => args,
        Ok(ParsedArgs::Info(text)) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Err(e) => return ExitCode::from(report(&e, &mut stderr)),
    };

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return ExitCode::from(report(&AppError::from(e), &mut stderr)),
    };

    // Initialize logging
    init_logging(&config);

    let controller = match build_controller(&config) {
        Ok(controller) => controller,
        Err(e) => return ExitCode::from(report(&e, &mut stderr)),
    };

    ExitCode::from(controller.handle(args, &mut stdout, &mut stderr).await)
}

fn build_controller(config: &Config) -> AppResult<CliController> {
    use en2ru_speech::domain::pipeline::SpeechPipeline;
    use en2ru_speech::infrastructure::repositories::{
        GoogleCredentials, GoogleTtsConnector, LibreTranslateRepository,
    };
    use en2ru_speech::infrastructure::speaker::Speaker;

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Translation repository
    let http_client = build_http_client(config.request_timeout).map_err(ConfigError::HttpClient)?;
    let translation_repo = Arc::new(LibreTranslateRepository::new(
        http_client,
        config.translate_api_url.clone(),
        config.translate_api_key.clone(),
    ));

    // 2. Speech client, connected lazily on first synthesis
    let credentials = GoogleCredentials::from_parts(
        config.google_api_key.clone(),
        config.google_access_token.clone(),
    );
    let connector = Arc::new(GoogleTtsConnector::new(
        config.tts_api_url.clone(),
        credentials,
        config.request_timeout,
    ));
    let speaker = Arc::new(Speaker::new(connector));

    // 3. Pipeline and controller
    let pipeline = Arc::new(SpeechPipeline::new(translation_repo, speaker));
    tracing::debug!(
        translate_api_url = %config.translate_api_url,
        tts_api_url = %config.tts_api_url,
        "Dependencies wired"
    );

    Ok(CliController::new(pipeline))
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "en2ru_speech=warn".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
