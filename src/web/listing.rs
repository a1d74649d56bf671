//! Assembles one month view: reference data, API fan-out, sort, statuses.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::data_fetcher::api::{ApiClient, Month, aggregate_month, resolve_month};
use crate::data_fetcher::models::{NormalizedMatch, Region};
use crate::data_fetcher::processors::{MatchStatus, StatusClassifier, sort_matches};
use crate::reference_data::{ReferenceData, load_reference_data_from_path};

/// Shared, immutable state behind every request.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub classifier: StatusClassifier,
}

/// A match with its status at the time the listing was built.
#[derive(Debug, Clone, Serialize)]
pub struct ListedMatch {
    #[serde(flatten)]
    pub game: NormalizedMatch,
    pub status: MatchStatus,
}

#[derive(Debug, Clone)]
pub struct MonthListing {
    pub month: Month,
    pub region_id: Option<String>,
    pub regions: Vec<Region>,
    pub matches: Vec<ListedMatch>,
    pub generated_at: DateTime<FixedOffset>,
}

/// Reads the `region` page parameter. Blank means no filter; anything else
/// is an opaque id forwarded to the API untouched.
pub fn parse_region_filter(param: Option<&str>) -> Option<String> {
    param
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

impl MonthListing {
    /// Builds the listing for the `month` and `region` page parameters.
    ///
    /// Never fails: an unreadable reference database yields empty region
    /// names and no region choices, failed days yield fewer matches.
    #[instrument(skip(state))]
    pub async fn build(state: &AppState, month: Option<&str>, region: Option<&str>) -> Self {
        let now = state.classifier.now();
        let month = resolve_month(month, now.date_naive());
        let region_id = parse_region_filter(region);

        let reference = match load_reference_data_from_path(state.config.database_path.clone())
            .await
        {
            Ok(reference) => reference,
            Err(e) => {
                error!("Failed to load reference data: {e}");
                ReferenceData::default()
            }
        };

        let mut matches = aggregate_month(
            &state.api,
            month,
            region_id.as_deref(),
            &reference.stadiums,
            state.config.day_fetch_concurrency,
        )
        .await;
        sort_matches(&mut matches);

        let matches: Vec<ListedMatch> = matches
            .into_iter()
            .map(|game| ListedMatch {
                status: state.classifier.classify(&game),
                game,
            })
            .collect();

        info!(
            "Built listing for {} (region: {:?}) with {} matches",
            month,
            region_id,
            matches.len()
        );

        MonthListing {
            month,
            region_id,
            regions: reference.regions,
            matches,
            generated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Whether `region` is the one the listing is filtered by. Ids are
    /// compared in their text form.
    pub fn is_selected_region(&self, region: &Region) -> bool {
        self.region_id
            .as_deref()
            .is_some_and(|selected| selected == region.region_id.to_string())
    }
}
