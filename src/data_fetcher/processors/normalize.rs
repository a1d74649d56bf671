use crate::data_fetcher::models::{
    NormalizedMatch, RawMatch, StadiumMap, region_name_for, value_as_count, value_as_text,
};
use chrono::NaiveDate;
use tracing::debug;

use super::match_status::parse_match_time;

/// Parses a listing date. Accepts `YYYY-MM-DD` on its own or as the prefix of a
/// longer timestamp.
pub fn parse_match_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            date.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

/// Normalizes a start time to `HH:MM`; anything unparseable becomes empty.
pub fn normalize_match_time(time: Option<&str>) -> String {
    time.and_then(parse_match_time)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Turns one API entry into a [`NormalizedMatch`].
///
/// A missing or unparseable `date` falls back to `queried_day`, the day whose
/// listing the entry came from. Unknown stadiums get an empty region name.
pub fn normalize_match(
    raw: &RawMatch,
    queried_day: NaiveDate,
    stadiums: &StadiumMap,
) -> NormalizedMatch {
    let raw_date = value_as_text(&raw.date);
    let match_date = match raw_date.as_deref().map(|d| (d, parse_match_date(d))) {
        Some((_, Some(date))) => date,
        Some((text, None)) => {
            debug!("Unparseable match date '{text}', using queried day {queried_day}");
            queried_day
        }
        None => queried_day,
    };

    let raw_time = value_as_text(&raw.time);
    let match_time = normalize_match_time(raw_time.as_deref());
    if match_time.is_empty()
        && let Some(text) = &raw_time
    {
        debug!("Unparseable match time '{text}' on {match_date}");
    }

    let stadium_name = value_as_text(&raw.stadium).unwrap_or_default();
    let region_name = region_name_for(stadiums, &stadium_name);

    NormalizedMatch {
        id: value_as_text(&raw.match_id).unwrap_or_default(),
        match_date,
        match_time,
        region_name,
        stadium_name,
        home_team: value_as_text(&raw.home_team).unwrap_or_default(),
        away_team: value_as_text(&raw.away_team).unwrap_or_default(),
        home_score: value_as_count(&raw.home_score),
        away_score: value_as_count(&raw.away_score),
        attendance: value_as_count(&raw.attendance),
    }
}
