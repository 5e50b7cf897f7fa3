use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Static files
    pub static_files_dir: PathBuf,

    // Build info
    pub commit_hash: String,
    pub build_time: String,
    pub version: String,

    // Logging
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Server
            host: env::var("WHEREAMI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),

            // Static files
            static_files_dir: PathBuf::from(
                env::var("STATIC_FILES_DIR").unwrap_or_else(|_| "static".to_string()),
            ),

            // Build info
            commit_hash: env::var("COMMIT_HASH").unwrap_or_else(|_| "unknown".to_string()),
            build_time: env::var("BUILD_TIME").unwrap_or_else(|_| "unknown".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),

            // Logging
            log_level: env::var("WHEREAMI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("WHEREAMI_LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!("whereami={},tower_http=info", self.log_level)
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
