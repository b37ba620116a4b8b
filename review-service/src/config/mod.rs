use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub security: SecurityConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Origins granted CORS access. A single `*` entry allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_body_bytes: u64,
}

impl ReviewConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix (port).
        let common = core_config::Config::load()?;

        let allowed_origins = get_env("ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let max_body_bytes = get_env("MAX_BODY_BYTES", "1048576").parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("MAX_BODY_BYTES must be an integer: {}", e))
        })?;

        Ok(ReviewConfig {
            common,
            security: SecurityConfig { allowed_origins },
            limits: LimitsConfig { max_body_bytes },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
