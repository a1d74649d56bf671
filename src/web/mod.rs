pub mod listing;
pub mod page;
pub mod server;

pub use listing::{AppState, ListedMatch, MonthListing, parse_region_filter};
pub use page::{render_page, render_text};
pub use server::{MatchQuery, SharedState, build_router, start_server};
