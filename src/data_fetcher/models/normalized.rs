use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A match after field-name normalization and region lookup.
///
/// `match_time` is `"HH:MM"` or empty, `region_name` is empty when the
/// stadium is not in the reference data. Neither is ever absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMatch {
    pub id: String,
    pub match_date: NaiveDate,
    pub match_time: String,
    pub stadium_name: String,
    pub region_name: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub attendance: Option<u32>,
}

impl NormalizedMatch {
    /// Both scores, when the API reported them.
    pub fn score(&self) -> Option<(u32, u32)> {
        self.home_score.zip(self.away_score)
    }
}
