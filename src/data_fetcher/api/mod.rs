pub mod aggregator;
pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use aggregator::{
    DayOutcome, SkipTally, aggregate_month, collect_matches, fetch_day, fetch_month_outcomes,
};
pub use date_logic::{Month, resolve_month};
pub use fetch_utils::{fetch_text, parse_match_list};
pub use http_client::{ApiClient, create_http_client_with_timeout};
pub use urls::build_match_list_url;
