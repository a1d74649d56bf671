use crate::constants::{APP_DIR_NAME, DEFAULT_DATABASE_FILE_NAME};
use std::path::{Path, PathBuf};

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}

/// Returns the default location of the reference-data SQLite file.
pub fn get_default_database_path() -> String {
    app_dir()
        .join(DEFAULT_DATABASE_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_app_dir() {
        let config = get_config_path();
        let logs = get_log_dir_path();
        let db = get_default_database_path();

        assert!(config.ends_with("config.toml"));
        assert!(db.ends_with(DEFAULT_DATABASE_FILE_NAME));
        for path in [&config, &logs, &db] {
            assert!(path.contains(APP_DIR_NAME), "{path} should live under the app dir");
        }
    }
}
