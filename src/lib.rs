//! KBO Match Schedule Viewer Library
//!
//! Fetches per-day KBO match listings from the match API, tags each match with
//! the region of its stadium from a local SQLite reference database, sorts
//! them, and renders a month view as HTML or plain text.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kbo_schedule::data_fetcher::api::ApiClient;
//! use kbo_schedule::data_fetcher::clock::SystemClock;
//! use kbo_schedule::data_fetcher::processors::StatusClassifier;
//! use kbo_schedule::web::{AppState, MonthListing, render_text};
//! use kbo_schedule::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let state = AppState {
//!         api: ApiClient::from_config(&config)?,
//!         classifier: StatusClassifier::new(Arc::new(SystemClock), config.live_window_minutes)?,
//!         config,
//!     };
//!
//!     let listing = MonthListing::build(&state, Some("2024-05"), None).await;
//!     print!("{}", render_text(&listing));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod reference_data;
pub mod web;

pub use config::Config;
pub use data_fetcher::api::{ApiClient, Month, aggregate_month};
pub use data_fetcher::models::{NormalizedMatch, StadiumMap};
pub use data_fetcher::processors::{MatchStatus, StatusKind, classify_match, sort_matches};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
