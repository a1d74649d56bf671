use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the day-listing `data` array as the API sends it.
///
/// Every field is optional and loosely typed: the API has been seen sending
/// ids and scores both as numbers and as strings, and leaving fields out for
/// matches that have not been played yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawMatch {
    #[serde(default)]
    pub match_id: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub time: Option<Value>,
    #[serde(default)]
    pub stadium: Option<Value>,
    #[serde(default)]
    pub home_team: Option<Value>,
    #[serde(default)]
    pub away_team: Option<Value>,
    #[serde(default)]
    pub home_score: Option<Value>,
    #[serde(default)]
    pub away_score: Option<Value>,
    #[serde(default)]
    pub attendance: Option<Value>,
}

/// Reads a loosely typed field as text. Numbers are rendered as-is, blank
/// strings and non-scalar values count as absent.
pub fn value_as_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a loosely typed field as a non-negative count. Accepts numbers and
/// numeric strings with thousands separators ("12,500").
pub fn value_as_count(value: &Option<Value>) -> Option<u32> {
    match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().replace(',', "").parse::<u32>().ok(),
        _ => None,
    }
}
