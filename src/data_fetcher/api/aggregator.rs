//! Month assembly: one listing request per calendar day

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, instrument, warn};

use crate::data_fetcher::models::{NormalizedMatch, RawMatch, StadiumMap};
use crate::data_fetcher::processors::normalize_match;
use crate::error::AppError;

use super::date_logic::Month;
use super::fetch_utils::{fetch_text, parse_match_list};
use super::http_client::ApiClient;
use super::urls::build_match_list_url;

/// What one day's listing request produced.
#[derive(Debug)]
pub enum DayOutcome {
    Fetched {
        date: NaiveDate,
        matches: Vec<RawMatch>,
    },
    Skipped {
        date: NaiveDate,
        reason: AppError,
    },
}

impl DayOutcome {
    pub fn date(&self) -> NaiveDate {
        match self {
            DayOutcome::Fetched { date, .. } | DayOutcome::Skipped { date, .. } => *date,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DayOutcome::Skipped { .. })
    }
}

/// Skipped days of one month, split by why they failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipTally {
    /// The request failed or returned a non-success status.
    pub network: usize,
    /// A body arrived but held no usable listing.
    pub payload: usize,
    pub other: usize,
}

impl SkipTally {
    pub fn from_outcomes(outcomes: &[DayOutcome]) -> Self {
        let mut tally = SkipTally::default();
        for outcome in outcomes {
            if let DayOutcome::Skipped { reason, .. } = outcome {
                if reason.is_network_error() {
                    tally.network += 1;
                } else if reason.is_parse_error() {
                    tally.payload += 1;
                } else {
                    tally.other += 1;
                }
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.network + self.payload + self.other
    }
}

fn log_skipped_day(date: NaiveDate, url: &str, reason: &AppError) {
    if reason.is_network_error() {
        warn!("Skipping {date}: request failed: {reason}");
    } else if reason.is_parse_error() {
        error!("Skipping {date}: unusable listing from {url}: {reason}");
    } else {
        warn!("Skipping {date}: {reason}");
    }
}

/// Requests and decodes the listing for a single day. Never fails: any problem
/// becomes [`DayOutcome::Skipped`] carrying the reason.
pub async fn fetch_day(client: &ApiClient, date: NaiveDate, region_id: Option<&str>) -> DayOutcome {
    let url = build_match_list_url(client.base_url(), date, region_id);

    let result = match fetch_text(client.http(), &url).await {
        Ok(body) => parse_match_list(&body, &url),
        Err(e) => Err(e),
    };

    match result {
        Ok(matches) => {
            debug!("{} listing entries for {}", matches.len(), date);
            DayOutcome::Fetched { date, matches }
        }
        Err(reason) => {
            log_skipped_day(date, &url, &reason);
            DayOutcome::Skipped { date, reason }
        }
    }
}

/// Fetches the listing of every day in `month`, in calendar order.
///
/// Up to `concurrency` requests are in flight at once; outcomes are returned
/// in day order regardless.
pub async fn fetch_month_outcomes(
    client: &ApiClient,
    month: Month,
    region_id: Option<&str>,
    concurrency: usize,
) -> Vec<DayOutcome> {
    stream::iter(month.days())
        .map(|date| fetch_day(client, date, region_id))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Assembles all matches of `month`, normalized and tagged with their region.
///
/// Issues exactly one request per calendar day. Days whose request or payload
/// fails are left out; the result may be empty but this never errors. Matches
/// are returned in day order, without deduplication, and unsorted.
///
/// # Example
/// ```rust,no_run
/// use kbo_schedule::data_fetcher::api::{ApiClient, Month, aggregate_month};
/// use kbo_schedule::data_fetcher::models::StadiumMap;
///
/// # async fn example() -> Result<(), kbo_schedule::AppError> {
/// let client = ApiClient::new("https://api.example.com", 10)?;
/// let month = Month::parse("2024-05")?;
/// let matches = aggregate_month(&client, month, None, &StadiumMap::new(), 1).await;
/// println!("{} matches", matches.len());
/// # Ok(())
/// # }
/// ```
#[instrument(skip(client, stadiums, month), fields(month = %month))]
pub async fn aggregate_month(
    client: &ApiClient,
    month: Month,
    region_id: Option<&str>,
    stadiums: &StadiumMap,
    concurrency: usize,
) -> Vec<NormalizedMatch> {
    let outcomes = fetch_month_outcomes(client, month, region_id, concurrency).await;
    collect_matches(outcomes, stadiums)
}

/// Normalizes the fetched days' entries and drops the skipped days.
pub fn collect_matches(outcomes: Vec<DayOutcome>, stadiums: &StadiumMap) -> Vec<NormalizedMatch> {
    let total_days = outcomes.len();
    let skipped = SkipTally::from_outcomes(&outcomes);
    let mut matches = Vec::new();

    for outcome in outcomes {
        match outcome {
            DayOutcome::Fetched {
                date,
                matches: raw_matches,
            } => {
                matches.extend(
                    raw_matches
                        .iter()
                        .map(|raw| normalize_match(raw, date, stadiums)),
                );
            }
            DayOutcome::Skipped { .. } => {}
        }
    }

    info!(
        "Collected {} matches from {} days ({} skipped: {} network, {} payload)",
        matches.len(),
        total_days,
        skipped.total(),
        skipped.network,
        skipped.payload
    );

    matches
}
