use leveled_logger::{LevelLogger, Logger, LoggerConfig, Severity};
use leveled_logger::{log_debug, log_error, log_fatal, log_info, log_warn};

const APP_NAME: &str = "A1-C0D3R";
const APP_SERVICE: &str = "MAIN";

fn main() {
    // An optional JSON config path; without one, log to stdout at info
    let config = match std::env::args().nth(1) {
        Some(path) => LoggerConfig::from_json_file(path),
        None => Ok(LoggerConfig {
            level: Severity::Info,
            name: format!("{} {}", APP_NAME, APP_SERVICE),
            file: None,
        }),
    };

    let logger = match config.and_then(|config| LevelLogger::from_config(&config)) {
        Ok(logger) => logger,
        Err(err) => {
            // Fatal output never depends on the destination, so a throwaway
            // stdout logger is enough to report and exit.
            let fallback = LevelLogger::with_writer(Severity::Error, APP_NAME, std::io::stdout());
            log_fatal!(fallback, "Error initializing logger: {}", err);
        }
    };

    log_debug!(logger; "This is a debug message");
    log_info!(logger; "Started", APP_NAME, "as", logger.name());
    log_warn!(logger; "Minimum severity is", logger.minimum());
    log_error!(logger, "Simulated failure in {} (code {})", APP_SERVICE, 42);
}
