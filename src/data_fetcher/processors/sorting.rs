use crate::data_fetcher::models::NormalizedMatch;
use std::cmp::Ordering;

/// Listing order: newest date first, earliest start time first within a day.
pub fn listing_order(a: &NormalizedMatch, b: &NormalizedMatch) -> Ordering {
    b.match_date
        .cmp(&a.match_date)
        .then_with(|| a.match_time.cmp(&b.match_time))
}

/// Sorts matches for display. The sort is stable: matches sharing a date and
/// start time keep their input order.
pub fn sort_matches(matches: &mut [NormalizedMatch]) {
    matches.sort_by(listing_order);
}
