pub mod match_status;
pub mod normalize;
pub mod sorting;

pub use match_status::{
    MatchStatus, StatusClassifier, StatusKind, classify_match, live_window_duration,
    parse_match_time,
};
pub use normalize::{normalize_match, normalize_match_time, parse_match_date};
pub use sorting::{listing_order, sort_matches};
