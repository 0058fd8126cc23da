use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8888;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

pub struct Config {
    pub database_url: String,

    pub port: u16,

    /// Origins permitted to call the API cross-origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port,
            cors_origins,
        })
    }
}
