use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_default_database_path, get_log_dir_path};
use user_prompts::prompt_for_api_domain;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the match API. Should include the scheme.
    pub api_domain: String,
    /// SQLite file holding the stadium and region reference tables.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Timeout in seconds for each day-listing request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Minutes after the listed start time during which a match counts as live.
    #[serde(default = "default_live_window")]
    pub live_window_minutes: u64,
    /// Day-listing requests kept in flight at once while assembling a month.
    #[serde(default = "default_day_fetch_concurrency")]
    pub day_fetch_concurrency: usize,
    /// Port the web server binds to.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

fn default_database_path() -> String {
    get_default_database_path()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_live_window() -> u64 {
    constants::DEFAULT_LIVE_WINDOW_MINUTES
}

fn default_day_fetch_concurrency() -> usize {
    constants::DEFAULT_DAY_FETCH_CONCURRENCY
}

fn default_listen_port() -> u16 {
    constants::DEFAULT_LISTEN_PORT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            database_path: default_database_path(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            live_window_minutes: default_live_window(),
            day_fetch_concurrency: default_day_fetch_concurrency(),
            listen_port: default_listen_port(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the API domain and creates one.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `KBO_API_DOMAIN` - Override API domain
    /// - `KBO_DATABASE_PATH` - Override reference database path
    /// - `KBO_LOG_FILE` - Override log file path
    /// - `KBO_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    /// - `KBO_LIVE_WINDOW_MINUTES` - Override live window (default: 180)
    /// - `KBO_DAY_FETCH_CONCURRENCY` - Override requests in flight per month (default: 1)
    /// - `KBO_PORT` - Override listen port (default: 8080)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            Config {
                api_domain,
                ..Config::default()
            }
        } else {
            let api_domain = prompt_for_api_domain().await?;
            let config = Config {
                api_domain,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `KBO_*` environment overrides on top of the current values.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(database_path) = std::env::var(env_vars::DATABASE_PATH) {
            self.database_path = database_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(window) = std::env::var(env_vars::LIVE_WINDOW_MINUTES)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.live_window_minutes = window;
        }

        if let Some(concurrency) = std::env::var(env_vars::DAY_FETCH_CONCURRENCY)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.day_fetch_concurrency = concurrency;
        }

        if let Some(port) = std::env::var(env_vars::PORT)
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.listen_port = port;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// API domain without a trailing slash, ready for path concatenation.
    pub fn api_base(&self) -> &str {
        self.api_domain.trim_end_matches('/')
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("Reference Database:");
            println!("{}", config.database_path);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Live Window:");
            println!("{} minutes", config.live_window_minutes);
            println!("────────────────────────────────────");
            println!("Day Fetch Concurrency:");
            println!("{}", config.day_fetch_concurrency);
            println!("────────────────────────────────────");
            println!("Listen Port:");
            println!("{}", config.listen_port);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", constants::DEFAULT_LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and adds an `https://`
    /// scheme to a bare domain.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain =
            if self.api_domain.starts_with("https://") || self.api_domain.starts_with("http://") {
                self.api_domain.clone()
            } else {
                format!("https://{}", self.api_domain)
            };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
