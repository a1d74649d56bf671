//! Calendar month handling for the month view

use crate::error::AppError;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use tracing::warn;

/// A calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    /// Parses `YYYY-MM`.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        let first_day = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
            .map_err(|e| AppError::datetime_parse_error(format!("Invalid month '{value}': {e}")))?;
        Ok(Month { first_day })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Month {
            first_day: date - chrono::Duration::days(i64::from(date.day0())),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first_day)
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let month = self.first_day.month();
        self.first_day
            .iter_days()
            .take_while(move |day| day.month() == month)
    }

    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    pub fn previous(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(Month::containing)
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(Month::containing)
            .unwrap_or(*self)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%Y-%m"))
    }
}

/// Resolves the `month` page parameter. Missing or invalid values fall back to
/// the month containing `today`.
pub fn resolve_month(param: Option<&str>, today: NaiveDate) -> Month {
    match param.map(str::trim).filter(|p| !p.is_empty()) {
        Some(value) => Month::parse(value).unwrap_or_else(|e| {
            warn!("{e}; falling back to current month");
            Month::containing(today)
        }),
        None => Month::containing(today),
    }
}
