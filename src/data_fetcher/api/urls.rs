//! URL building for the match API

use crate::constants::MATCH_LIST_PATH;
use chrono::NaiveDate;

/// Builds the day-listing URL, optionally narrowed to one region. The region
/// id is passed through as given.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use kbo_schedule::data_fetcher::api::build_match_list_url;
///
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(
///     build_match_list_url("https://api.example.com", day, None),
///     "https://api.example.com/matches/list.php?date=2024-05-01"
/// );
/// assert_eq!(
///     build_match_list_url("https://api.example.com", day, Some("03")),
///     "https://api.example.com/matches/list.php?date=2024-05-01&region_id=03"
/// );
/// ```
pub fn build_match_list_url(api_base: &str, date: NaiveDate, region_id: Option<&str>) -> String {
    let date = date.format("%Y-%m-%d");
    match region_id {
        Some(region_id) => format!("{api_base}{MATCH_LIST_PATH}?date={date}&region_id={region_id}"),
        None => format!("{api_base}{MATCH_LIST_PATH}?date={date}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_region_id_is_sent_verbatim() {
        assert_eq!(
            build_match_list_url("http://x", day(), Some("R07")),
            "http://x/matches/list.php?date=2024-05-01&region_id=R07"
        );
        assert_eq!(
            build_match_list_url("http://x", day(), Some("007")),
            "http://x/matches/list.php?date=2024-05-01&region_id=007"
        );
    }
}
