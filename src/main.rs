use std::process::ExitCode;

use tracing::{error, info};

use formrelay::{build_mailer, AppState, Config, ContactService, WebServer};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration
    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = formrelay::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        formrelay::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let mailer = match build_mailer(&config.mail) {
        Ok(mailer) => mailer,
        Err(e) => {
            error!("Failed to set up mail transport: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("formrelay - contact form email relay");
    info!(
        "Relaying submissions to {} from {}:{}",
        config.mail.recipient, config.web.host, config.web.port
    );

    let state = AppState::new(ContactService::from_config(mailer, &config));
    let server = WebServer::new(&config.web, state);

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
