use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::domain::transcript::{parse_encoding_list, TextEncoding, DEFAULT_ENCODINGS};

pub const DEFAULT_ENGINE_COMMAND: &str = "podcastfy-bridge";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // API key gate
    pub require_api_key: bool,
    pub api_key: Option<String>,
    // Engine
    pub engine_command: String,
    pub engine_timeout_secs: u64,
    // Artifacts
    pub artifact_ttl_secs: u64,
    pub legacy_path_downloads: bool,
    pub transcript_encodings: Vec<TextEncoding>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let require_api_key = parse_flag("REQUIRE_API_KEY", false);
        let api_key = env::var("API_KEY").ok().filter(|key| !key.is_empty());

        if require_api_key && api_key.is_none() {
            return Err("REQUIRE_API_KEY is enabled but API_KEY is not set".into());
        }

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            require_api_key,
            api_key,
            engine_command: env::var("ENGINE_COMMAND")
                .unwrap_or_else(|_| DEFAULT_ENGINE_COMMAND.to_string()),
            engine_timeout_secs: env::var("ENGINE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse()?,
            artifact_ttl_secs: env::var("ARTIFACT_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,
            legacy_path_downloads: parse_flag("LEGACY_PATH_DOWNLOADS", true),
            transcript_encodings: match env::var("TRANSCRIPT_ENCODINGS") {
                Ok(value) => parse_encoding_list(&value)?,
                Err(_) => DEFAULT_ENCODINGS.to_vec(),
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// `None` when the engine may run indefinitely
    pub fn engine_timeout(&self) -> Option<Duration> {
        match self.engine_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn artifact_ttl(&self) -> Duration {
        Duration::from_secs(self.artifact_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            require_api_key: false,
            api_key: None,
            engine_command: DEFAULT_ENGINE_COMMAND.to_string(),
            engine_timeout_secs: 900,
            artifact_ttl_secs: 3600,
            legacy_path_downloads: true,
            transcript_encodings: DEFAULT_ENCODINGS.to_vec(),
        }
    }
}

fn parse_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|value| matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}
