use super::Config;
use crate::data_fetcher::processors::live_window_duration;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - Database path cannot be empty
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
/// - Timeout, live window and fetch concurrency must be positive
/// - Live window must fit in a duration
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.as_str();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if config.database_path.is_empty() {
        return Err(AppError::config_error("Database path cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.live_window_minutes == 0 {
        return Err(AppError::config_error(
            "Live window must be at least 1 minute",
        ));
    }

    if live_window_duration(config.live_window_minutes).is_none() {
        return Err(AppError::config_error(format!(
            "Live window of {} minutes is too large",
            config.live_window_minutes
        )));
    }

    if config.day_fetch_concurrency == 0 {
        return Err(AppError::config_error(
            "Day fetch concurrency must be at least 1",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_config() -> Config {
        Config {
            api_domain: "https://api.example.com".to_string(),
            database_path: "/tmp/kbo.sqlite".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_domain_rules() {
        let mut config = valid_config();

        config.api_domain = String::new();
        assert!(validate_config(&config).is_err());

        config.api_domain = "not-a-domain".to_string();
        assert!(validate_config(&config).is_err());

        config.api_domain = "api.example.com".to_string();
        assert!(validate_config(&config).is_ok());

        config.api_domain = "localhost:9000".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = valid_config();
        config.http_timeout_seconds = 0;
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.live_window_minutes = 0;
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.day_fetch_concurrency = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_oversized_live_window_rejected() {
        let mut config = valid_config();
        config.live_window_minutes = u64::MAX;
        assert!(validate_config(&config).is_err());

        config.live_window_minutes = 60 * 24 * 365;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_dir_is_created() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("kbo.log");

        let mut config = valid_config();
        config.log_file_path = Some(log_path.to_string_lossy().to_string());

        assert!(validate_config(&config).is_ok());
        assert!(dir.path().join("nested").exists());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let mut config = valid_config();
        config.log_file_path = Some(String::new());
        assert!(validate_config(&config).is_err());
    }
}
