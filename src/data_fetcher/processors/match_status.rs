use crate::constants::status;
use crate::data_fetcher::clock::Clock;
use crate::data_fetcher::models::NormalizedMatch;
use crate::error::AppError;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Scheduled,
    Live,
    Finished,
}

impl StatusKind {
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Scheduled => status::SCHEDULED_LABEL,
            StatusKind::Live => status::LIVE_LABEL,
            StatusKind::Finished => status::FINISHED_LABEL,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Scheduled => status::SCHEDULED_CLASS,
            StatusKind::Live => status::LIVE_CLASS,
            StatusKind::Finished => status::FINISHED_CLASS,
        }
    }
}

/// Display-ready status of a match: the kind plus its badge label and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchStatus {
    pub status: StatusKind,
    pub label: &'static str,
    pub css_class: &'static str,
}

impl From<StatusKind> for MatchStatus {
    fn from(kind: StatusKind) -> Self {
        MatchStatus {
            status: kind,
            label: kind.label(),
            css_class: kind.css_class(),
        }
    }
}

/// Parses a listing start time. Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_match_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}

/// Derives the status of a match from its date and start time relative to `now`.
///
/// - Earlier day: finished. Later day: scheduled.
/// - Same day: scheduled until the start time (or when no time is listed),
///   live from the start time until `live_window` has elapsed, finished after.
///
/// `now` is expected in KST; its wall-clock date decides what "today" is.
///
/// # Examples
///
/// ```rust
/// use chrono::{Duration, NaiveDate, TimeZone};
/// use kbo_schedule::data_fetcher::clock::kst;
/// use kbo_schedule::data_fetcher::processors::{StatusKind, classify_match};
///
/// let now = kst().with_ymd_and_hms(2024, 5, 1, 17, 0, 0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
///
/// let status = classify_match(date, "16:00", now, Duration::hours(3));
/// assert_eq!(status.status, StatusKind::Live);
/// assert_eq!(status.label, "진행중");
/// ```
pub fn classify_match(
    match_date: NaiveDate,
    match_time: &str,
    now: DateTime<FixedOffset>,
    live_window: Duration,
) -> MatchStatus {
    let now_local = now.naive_local();
    let today = now_local.date();

    let kind = if match_date < today {
        StatusKind::Finished
    } else if match_date > today {
        StatusKind::Scheduled
    } else {
        match parse_match_time(match_time) {
            None => StatusKind::Scheduled,
            Some(start_time) => {
                let elapsed = now_local.signed_duration_since(match_date.and_time(start_time));
                if elapsed < Duration::zero() {
                    StatusKind::Scheduled
                } else if elapsed < live_window {
                    StatusKind::Live
                } else {
                    StatusKind::Finished
                }
            }
        }
    };

    kind.into()
}

/// The live window as a duration, or `None` when the minute count is too
/// large to represent.
pub fn live_window_duration(minutes: u64) -> Option<Duration> {
    i64::try_from(minutes).ok().and_then(Duration::try_minutes)
}

/// Classifies matches against a shared clock and a configured live window.
#[derive(Clone)]
pub struct StatusClassifier {
    clock: Arc<dyn Clock>,
    live_window: Duration,
}

impl StatusClassifier {
    pub fn new(clock: Arc<dyn Clock>, live_window_minutes: u64) -> Result<Self, AppError> {
        let live_window = live_window_duration(live_window_minutes).ok_or_else(|| {
            AppError::config_error(format!(
                "Live window of {live_window_minutes} minutes is out of range"
            ))
        })?;
        Ok(StatusClassifier { clock, live_window })
    }

    pub fn live_window(&self) -> Duration {
        self.live_window
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    pub fn classify(&self, game: &NormalizedMatch) -> MatchStatus {
        classify_match(
            game.match_date,
            &game.match_time,
            self.clock.now(),
            self.live_window,
        )
    }
}
