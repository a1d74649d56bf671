//! Application-wide constants and configuration defaults
//!
//! This module centralizes the magic numbers of the viewer so that the
//! config layer, the fetcher and the renderer agree on them.

/// Default timeout for a single day-listing request in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// How long after first pitch a match is still shown as in progress (3 hours)
pub const DEFAULT_LIVE_WINDOW_MINUTES: u64 = 180;

/// Number of day-listing requests in flight at once; 1 keeps the fan-out sequential
pub const DEFAULT_DAY_FETCH_CONCURRENCY: usize = 1;

/// Port the web server listens on when none is configured
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "kbo_schedule";

/// Log file name used when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "kbo_schedule.log";

/// SQLite file name used when no database path is configured
pub const DEFAULT_DATABASE_FILE_NAME: &str = "kbo.sqlite";

/// Korea Standard Time offset from UTC in seconds (UTC+09:00, no DST)
pub const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Day-listing endpoint path relative to the API domain
pub const MATCH_LIST_PATH: &str = "/matches/list.php";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_DOMAIN: &str = "KBO_API_DOMAIN";
    pub const DATABASE_PATH: &str = "KBO_DATABASE_PATH";
    pub const LOG_FILE: &str = "KBO_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "KBO_HTTP_TIMEOUT";
    pub const LIVE_WINDOW_MINUTES: &str = "KBO_LIVE_WINDOW_MINUTES";
    pub const DAY_FETCH_CONCURRENCY: &str = "KBO_DAY_FETCH_CONCURRENCY";
    pub const PORT: &str = "KBO_PORT";
}

/// Status badge labels and CSS classes
pub mod status {
    pub const SCHEDULED_LABEL: &str = "예정";
    pub const SCHEDULED_CLASS: &str = "scheduled";
    pub const LIVE_LABEL: &str = "진행중";
    pub const LIVE_CLASS: &str = "live";
    pub const FINISHED_LABEL: &str = "종료";
    pub const FINISHED_CLASS: &str = "finished";
}
