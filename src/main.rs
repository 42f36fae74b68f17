use std::process::ExitCode;

use phoneosint::{
    config::{LogFormat, ServerConfig},
    http, logging,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            logging::init(LogFormat::Text);
            log::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_format);

    if let Err(err) = http::serve(&config).await {
        log::error!("HTTP server failed: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
