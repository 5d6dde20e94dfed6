//! Day-first date parsing and calendar month buckets
//!
//! Source dates are written `DD/MM/YY` or `DD/MM/YYYY`. Two-digit years are
//! offset from 2000. Anything else parses to `None`, which callers treat as
//! an absent date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Century offset applied to two-digit years
const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// Parse a day-first `DD/MM/YY[YY]` date string.
///
/// Returns `None` for empty input, the wrong number of components,
/// non-numeric components, unsupported year widths, or impossible calendar
/// dates (e.g. `31/02/25`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pledge_common::dates::parse_day_first;
///
/// assert_eq!(parse_day_first("15/03/25"), NaiveDate::from_ymd_opt(2025, 3, 15));
/// assert_eq!(parse_day_first("01/12/2023"), NaiveDate::from_ymd_opt(2023, 12, 1));
/// assert_eq!(parse_day_first(""), None);
/// assert_eq!(parse_day_first("next year"), None);
/// ```
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut parts = value.split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let day = parse_component(day, 1, 2)?;
    let month = parse_component(month, 1, 2)?;
    let year = match year.len() {
        2 => TWO_DIGIT_YEAR_BASE + parse_component(year, 2, 2)? as i32,
        4 => parse_component(year, 4, 4)? as i32,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an all-digit component whose width lies in `[min_len, max_len]`
fn parse_component(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// A calendar month, the bucket unit of the delivery timeline
///
/// Serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month; `month` must lie in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Internal constructor for known-valid constants
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month, `None` past the last representable year
    pub fn succ(self) -> Option<Self> {
        if self.month == 12 {
            Some(Self {
                year: self.year.checked_add(1)?,
                month: 1,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// Number of months from `start` through `end`, both inclusive
    pub fn span(start: Month, end: Month) -> usize {
        if start > end {
            return 0;
        }
        let years = i64::from(end.year) - i64::from(start.year);
        let months = years * 12 + i64::from(end.month) - i64::from(start.month) + 1;
        usize::try_from(months).unwrap_or(usize::MAX)
    }

    /// Every month from `start` through `end`, both inclusive.
    ///
    /// Empty when `start` is after `end`.
    pub fn range_inclusive(start: Month, end: Month) -> Vec<Month> {
        let mut months = Vec::new();
        let mut current = start;
        while current <= end {
            months.push(current);
            match current.succ() {
                Some(next) => current = next,
                None => break,
            }
        }
        months
    }

    /// Short display label, e.g. `Dec 2023`
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidInput(format!("Invalid month '{}', expected YYYY-MM", s));

        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_two_digit_year() {
        assert_eq!(parse_day_first("15/03/25"), Some(ymd(2025, 3, 15)));
        assert_eq!(parse_day_first("01/01/00"), Some(ymd(2000, 1, 1)));
    }

    #[test]
    fn test_parse_four_digit_year() {
        assert_eq!(parse_day_first("31/12/2026"), Some(ymd(2026, 12, 31)));
        assert_eq!(parse_day_first("1/2/2024"), Some(ymd(2024, 2, 1)));
    }

    #[test]
    fn test_parse_is_day_first() {
        // Month-first reading would be 3 December
        assert_eq!(parse_day_first("12/03/24"), Some(ymd(2024, 3, 12)));
        assert_eq!(parse_day_first("13/12/24"), Some(ymd(2024, 12, 13)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_day_first(""), None);
        assert_eq!(parse_day_first("   "), None);
        assert_eq!(parse_day_first("TBC"), None);
        assert_eq!(parse_day_first("15/03"), None);
        assert_eq!(parse_day_first("15/03/25/01"), None);
        assert_eq!(parse_day_first("15/03/225"), None);
        assert_eq!(parse_day_first("aa/03/25"), None);
        assert_eq!(parse_day_first("+1/03/25"), None);
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse_day_first("31/02/25"), None);
        assert_eq!(parse_day_first("01/13/25"), None);
        assert_eq!(parse_day_first("00/01/25"), None);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(parse_day_first(" 01/06/24 "), Some(ymd(2024, 6, 1)));
    }

    #[test]
    fn test_month_succ_wraps_year() {
        let dec = Month::new(2023, 12).unwrap();
        assert_eq!(dec.succ(), Month::new(2024, 1));
    }

    #[test]
    fn test_month_range_inclusive() {
        let start = Month::new(2023, 12).unwrap();
        let end = Month::new(2026, 11).unwrap();
        let months = Month::range_inclusive(start, end);
        assert_eq!(months.len(), 36);
        assert_eq!(months.first(), Some(&start));
        assert_eq!(months.last(), Some(&end));

        assert!(Month::range_inclusive(end, start).is_empty());
        assert_eq!(Month::span(start, end), 36);
        assert_eq!(Month::span(end, start), 0);
    }

    #[test]
    fn test_month_range_stops_at_last_year() {
        let last = Month::new(i32::MAX, 12).unwrap();
        assert_eq!(last.succ(), None);

        let months = Month::range_inclusive(Month::new(i32::MAX, 11).unwrap(), last);
        assert_eq!(months, vec![Month::new(i32::MAX, 11).unwrap(), last]);
    }

    #[test]
    fn test_month_parse_and_display() {
        let month: Month = "2024-07".parse().unwrap();
        assert_eq!(month, Month::new(2024, 7).unwrap());
        assert_eq!(month.to_string(), "2024-07");
        assert_eq!(month.label(), "Jul 2024");

        assert_eq!("-44-03".parse::<Month>().unwrap(), Month::new(-44, 3).unwrap());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("July".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_of_date() {
        assert_eq!(Month::of(ymd(2025, 3, 15)), Month::new(2025, 3).unwrap());
    }
}
