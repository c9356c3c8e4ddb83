// 📅 Birth Date - validated calendar input + digit extraction
// Local calendar fields only: no timezone is attached or implied.

use crate::error::{Result, ScannerError};
use crate::reducer::{digit_sum, DigitalRoot};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Days per month when the year is unknown (February admits the 29th)
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Immutable, validated birth date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Build from calendar fields, rejecting anything that is not a real date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(ScannerError::InvalidDate(format!(
                "year {} is outside 1..=9999",
                year
            )));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(BirthDate)
            .ok_or_else(|| {
                ScannerError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Decimal digits of month, day, year concatenated with no separators.
    ///
    /// 1990-05-07 → "5" + "7" + "1990" → [5, 7, 1, 9, 9, 0]
    pub fn digits(&self) -> Vec<u8> {
        format!("{}{}{}", self.month(), self.day(), self.year())
            .bytes()
            .map(|b| b - b'0')
            .collect()
    }

    /// Sum of [`BirthDate::digits`]. Never zero: month and day are at least 1.
    pub fn digit_sum(&self) -> NonZeroU64 {
        let sum: u64 = self.digits().iter().map(|&d| d as u64).sum();
        NonZeroU64::new(sum).unwrap_or(NonZeroU64::MIN)
    }

    /// Bhagyank: root of the full date
    pub fn destiny_number(&self) -> DigitalRoot {
        DigitalRoot::reduce(self.digit_sum())
    }

    /// Mulank: root of the day of month
    pub fn mulank(&self) -> DigitalRoot {
        DigitalRoot::reduce(NonZeroU64::new(self.day() as u64).unwrap_or(NonZeroU64::MIN))
    }
}

impl FromStr for BirthDate {
    type Err = ScannerError;

    /// Parses `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| ScannerError::InvalidDate(format!("{}: {}", s, e)))?;
        BirthDate::new(date.year(), date.month(), date.day())
    }
}

impl TryFrom<String> for BirthDate {
    type Error = ScannerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> String {
        date.to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ============================================================================
// BOUNDARY HELPERS
// ============================================================================

/// Validate a (month, day) pair without a year. February 29 is accepted.
pub fn validate_month_day(month: u32, day: u32) -> Result<()> {
    let max = month
        .checked_sub(1)
        .and_then(|i| MAX_DAYS.get(i as usize))
        .ok_or_else(|| ScannerError::InvalidDate(format!("month {} is outside 1..=12", month)))?;

    if day == 0 || day > *max {
        return Err(ScannerError::InvalidDate(format!(
            "day {} is outside 1..={} for month {}",
            day, max, month
        )));
    }
    Ok(())
}

/// Parse a birth time given as `HH:MM` (24h). Seconds are accepted and ignored.
pub fn parse_birth_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| ScannerError::InvalidTime(format!("{}: {}", s, e)))
}

/// Reject a day of month outside 1..=31 before reducing it
pub fn mulank_for_day(day: u32) -> Result<DigitalRoot> {
    if !(1..=31).contains(&day) {
        return Err(ScannerError::InvalidDate(format!(
            "day {} is outside 1..=31",
            day
        )));
    }
    Ok(DigitalRoot::reduce(NonZeroU64::new(day as u64).unwrap_or(NonZeroU64::MIN)))
}

// ============================================================================
// TESTS
// ============================================================================
