//! Month-year labels such as "March 2025"
//!
//! Dated tables are bucketed by the calendar month of each row. The label
//! prints as the full month name followed by the year, which is also the
//! text shown in month selectors.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// A calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthLabel {
    year: i32,
    month: u32,
}

impl MonthLabel {
    /// Create a label; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The label a date belongs to
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Check if a date falls in this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn chrono_month(&self) -> Month {
        Month::try_from(self.month as u8).unwrap_or(Month::January)
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.chrono_month().name(), self.year)
    }
}

impl FromStr for MonthLabel {
    type Err = DashboardError;

    /// Accepts "March 2025", "march 2025", "Mar 2025" and "2025-03"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DashboardError::InvalidMonth(s.to_string());

        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year.trim().parse().map_err(|_| invalid())?;
            let month: u32 = month.trim().parse().map_err(|_| invalid())?;
            return Self::new(year, month).ok_or_else(invalid);
        }

        let mut parts = s.split_whitespace();
        let (Some(name), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month = month_from_name(name).ok_or_else(invalid)?;
        Ok(Self { year, month })
    }
}

/// Match a full or three-letter English month name, ignoring case
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    (1..=12u8).find_map(|m| {
        let full = Month::try_from(m).ok()?.name().to_lowercase();
        (lower == full || (lower.len() == 3 && full.starts_with(&lower))).then_some(m as u32)
    })
}

impl From<MonthLabel> for String {
    fn from(label: MonthLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for MonthLabel {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
