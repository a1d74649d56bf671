use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Payload errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// True for transport-level and HTTP status failures: the request itself
    /// did not produce a usable body.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
        )
    }

    /// True when a body arrived but could not be turned into match data.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_datetime_parse_error_helper() {
        let error = AppError::datetime_parse_error("Invalid month '2024-13'");
        assert!(matches!(error, AppError::DateTimeParse(_)));
        assert_eq!(
            error.to_string(),
            "Date/time parsing error: Invalid month '2024-13'"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/matches/list.php");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/matches/list.php"
        );
    }

    #[test]
    fn test_api_no_data_helper() {
        let error = AppError::api_no_data("Missing 'data' list", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API returned empty or missing data: Missing 'data' list (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_is_network_error() {
        assert!(AppError::network_timeout("url").is_network_error());
        assert!(AppError::network_connection("url", "refused").is_network_error());
        assert!(AppError::api_not_found("url").is_network_error());
        assert!(AppError::api_server_error(500, "message", "url").is_network_error());
        assert!(AppError::api_service_unavailable(503, "message", "url").is_network_error());
        assert!(AppError::api_rate_limit("message", "url").is_network_error());

        assert!(!AppError::api_malformed_json("message", "url").is_network_error());
        assert!(!AppError::config_error("message").is_network_error());
    }

    #[test]
    fn test_is_parse_error() {
        assert!(AppError::api_malformed_json("message", "url").is_parse_error());
        assert!(AppError::api_unexpected_structure("message", "url").is_parse_error());
        assert!(AppError::api_no_data("message", "url").is_parse_error());

        assert!(!AppError::network_timeout("url").is_parse_error());
        assert!(!AppError::datetime_parse_error("message").is_parse_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let app_error: AppError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(app_error, AppError::Database(_)));
        assert!(app_error.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<toml::Value>("invalid = [").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
