use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT must be a number between 0 and 65535, got {:?}", value)
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "LOG_FORMAT must be \"pretty\" or \"json\", got {:?}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or empty
    /// variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => 8080u16,
        };
        let cors_allowed_origin =
            var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());
        let log_format = match var("LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => LogFormat::default(),
        };

        Ok(AppConfig {
            host,
            port,
            cors_allowed_origin,
            log_format,
        })
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
