//! Status buckets
//!
//! A commitment's status is a signed percentage: `0` not started, `1..=99`
//! in progress, `100` delivered, negative failed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Status value of a delivered commitment
pub const DELIVERED_STATUS: i64 = 100;

/// Discrete progress bucket derived from a numeric status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    NotStarted,
    InProgress,
    Delivered,
    Failed,
}

impl StatusBucket {
    /// All buckets in display order
    pub const ALL: [StatusBucket; 4] = [
        StatusBucket::NotStarted,
        StatusBucket::InProgress,
        StatusBucket::Delivered,
        StatusBucket::Failed,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::NotStarted => "Not Started",
            StatusBucket::InProgress => "In Progress",
            StatusBucket::Delivered => "Delivered",
            StatusBucket::Failed => "Failed",
        }
    }
}

/// Classify a normalized status value.
///
/// Total over `i64`. `100` is checked before the positive range, so values
/// above 100 land in `InProgress` rather than `Delivered`.
///
/// # Examples
///
/// ```
/// use pledge_common::status::{classify, StatusBucket};
///
/// assert_eq!(classify(100), StatusBucket::Delivered);
/// assert_eq!(classify(0), StatusBucket::NotStarted);
/// assert_eq!(classify(-5), StatusBucket::Failed);
/// assert_eq!(classify(37), StatusBucket::InProgress);
/// ```
pub fn classify(status: i64) -> StatusBucket {
    if status == DELIVERED_STATUS {
        StatusBucket::Delivered
    } else if status < 0 {
        StatusBucket::Failed
    } else if status == 0 {
        StatusBucket::NotStarted
    } else {
        StatusBucket::InProgress
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusBucket {
    type Err = Error;

    /// Accepts `not-started`, `not_started`, `NotStarted`, `Not Started`
    /// and the same spellings of the other buckets, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "notstarted" => Ok(StatusBucket::NotStarted),
            "inprogress" => Ok(StatusBucket::InProgress),
            "delivered" => Ok(StatusBucket::Delivered),
            "failed" => Ok(StatusBucket::Failed),
            _ => Err(Error::InvalidInput(format!("Unknown status bucket: {}", s))),
        }
    }
}
