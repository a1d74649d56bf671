//! Wall-clock access in Korea Standard Time.
//!
//! Everything that asks "what is today" goes through [`Clock`] so that status
//! classification and month defaults can be tested against fixed instants.

use crate::constants::KST_OFFSET_SECONDS;
use crate::error::AppError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// The fixed UTC+09:00 offset. Korea does not observe daylight saving time.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECONDS).expect("UTC+09:00 is within the valid offset range")
}

pub trait Clock: Send + Sync {
    /// Current instant in KST.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current calendar date in KST.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&kst())
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self(now)
    }

    /// Builds a clock from a naive KST wall time, e.g. `2024-05-01 17:00`.
    pub fn at_kst(date: NaiveDate, hour: u32, minute: u32) -> Option<Self> {
        let naive = date.and_hms_opt(hour, minute, 0)?;
        kst().from_local_datetime(&naive).single().map(Self)
    }

    /// Parses a KST wall time written as `YYYY-MM-DDTHH:MM` (a space also works
    /// as the separator).
    pub fn parse_kst(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
            .map_err(|e| AppError::datetime_parse_error(format!("Invalid instant '{value}': {e}")))?;
        kst()
            .from_local_datetime(&naive)
            .single()
            .map(Self)
            .ok_or_else(|| AppError::datetime_parse_error(format!("Ambiguous instant '{value}'")))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
