use thiserror::Error;

/// Configuration issues detected while reading the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
