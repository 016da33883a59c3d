//! Start-up configuration loading and logger initialisation

use bind_shared::config::{AppConfig, Environment, LoggingConfig};

/// Load `.env` files and build the application configuration.
///
/// The environment-specific file (e.g. `.env.production`) is read first so
/// its values win over the generic `.env`; real environment variables win
/// over both.
pub fn load() -> AppConfig {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    AppConfig::from_env()
}

/// Initialise `env_logger`; `RUST_LOG` overrides the configured level
pub fn init_logger(logging: &LoggingConfig) {
    let style = if logging.colored { "auto" } else { "never" };
    let env = env_logger::Env::new()
        .default_filter_or(logging.level.as_str())
        .default_write_style_or(style);

    // A second call (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}
