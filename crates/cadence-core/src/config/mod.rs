use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_CAP;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub expansion: ExpansionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the address the listener binds to, as "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Limits applied to occurrence expansion requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Largest `cap` a caller may request.
    pub max_cap: usize,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `CADENCE_`-prefixed environment variables
    /// and an optional `config.toml`.
    ///
    /// Nested keys use a double underscore, e.g. `CADENCE_SERVER__PORT=9000` or
    /// `CADENCE_EXPANSION__MAX_CAP=500`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if the loaded values are out of range.
    pub fn load() -> CoreResult<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("expansion.max_cap", DEFAULT_MAX_CAP as u64)?
            // Env
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Snake)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.check()?;
        Ok(settings)
    }

    /// ## Summary
    /// Rejects values that deserialize fine but cannot be served.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if `expansion.max_cap` is zero.
    pub fn check(&self) -> CoreResult<()> {
        if self.expansion.max_cap == 0 {
            return Err(CoreError::InvalidInput(
                "expansion.max_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        bind_addr = %settings.server.bind_addr(),
        max_cap = settings.expansion.max_cap,
        "Settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests;
