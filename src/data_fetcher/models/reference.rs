use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Region a stadium belongs to, keyed by the stadium's exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StadiumRegion {
    pub stadium_name: String,
    pub region_name: String,
    pub region_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub region_id: i64,
    pub region_name: String,
}

/// Stadium name → region lookup built once per request.
pub type StadiumMap = HashMap<String, StadiumRegion>;

/// Builds the lookup table; a later row with the same stadium name wins.
pub fn build_stadium_map(rows: impl IntoIterator<Item = StadiumRegion>) -> StadiumMap {
    rows.into_iter()
        .map(|row| (row.stadium_name.clone(), row))
        .collect()
}

/// Region name for a stadium, or the empty string when it is unknown.
pub fn region_name_for(map: &StadiumMap, stadium_name: &str) -> String {
    map.get(stadium_name)
        .map(|entry| entry.region_name.clone())
        .unwrap_or_default()
}
