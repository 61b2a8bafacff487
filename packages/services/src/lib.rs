pub mod config;
pub mod validation;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use validation::*;
