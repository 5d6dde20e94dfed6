//! Commitment list sorting
//!
//! Two comparison modes:
//! - **Date** (`Updated`, `Due`): day-first dates compared chronologically.
//!   Records without a usable date sort after every dated record in both
//!   directions.
//! - **Natural** (everything else): text compared lexicographically, status
//!   compared numerically.
//!
//! Sorting is stable, so equal keys keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use pledge_common::{CommitmentRecord, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field a list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Category,
    Commitment,
    Party,
    Status,
    Updated,
    Due,
    References,
    LobbyFor,
    LobbyAgainst,
    Notes,
    Metadata,
}

impl SortKey {
    pub const ALL: [SortKey; 11] = [
        SortKey::Category,
        SortKey::Commitment,
        SortKey::Party,
        SortKey::Status,
        SortKey::Updated,
        SortKey::Due,
        SortKey::References,
        SortKey::LobbyFor,
        SortKey::LobbyAgainst,
        SortKey::Notes,
        SortKey::Metadata,
    ];

    /// Source column name
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Category => "Category",
            SortKey::Commitment => "Commitment",
            SortKey::Party => "Party",
            SortKey::Status => "Status",
            SortKey::Updated => "Updated",
            SortKey::Due => "Due",
            SortKey::References => "References",
            SortKey::LobbyFor => "LobbyFor",
            SortKey::LobbyAgainst => "LobbyAgainst",
            SortKey::Notes => "Notes",
            SortKey::Metadata => "Metadata",
        }
    }

    /// Whether this key compares in date mode
    pub fn is_date(&self) -> bool {
        matches!(self, SortKey::Updated | SortKey::Due)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    /// Column name, case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.column().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown sort column: {}", s)))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(Error::InvalidInput(format!("Unknown sort order: {}", s))),
        }
    }
}

/// Selected sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare two records under this configuration
    pub fn compare(&self, a: &CommitmentRecord, b: &CommitmentRecord) -> Ordering {
        match self.key {
            SortKey::Updated => compare_dates(a.updated_on(), b.updated_on(), self.direction),
            SortKey::Due => compare_dates(a.due_on(), b.due_on(), self.direction),
            SortKey::Status => self.direction.apply(a.status().cmp(&b.status())),
            key => self.direction.apply(text_field(a, key).cmp(text_field(b, key))),
        }
    }
}

/// Date-mode comparison; undated records go last whatever the direction
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn text_field(record: &CommitmentRecord, key: SortKey) -> &str {
    match key {
        SortKey::Category => record.category(),
        SortKey::Commitment => record.commitment(),
        SortKey::Party => record.party(),
        SortKey::References => record.references(),
        SortKey::LobbyFor => record.lobby_for(),
        SortKey::LobbyAgainst => record.lobby_against(),
        SortKey::Notes => record.notes(),
        SortKey::Metadata => record.metadata(),
        SortKey::Status | SortKey::Updated | SortKey::Due => "",
    }
}

/// Return the records ordered by `config`; the input is left untouched
pub fn sort_records<'a, I>(records: I, config: &SortConfig) -> Vec<&'a CommitmentRecord>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let mut sorted: Vec<&CommitmentRecord> = records.into_iter().collect();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| config.compare(a, b));
    debug!(
        "Sorted {} records by {} {:?}",
        sorted.len(),
        config.key,
        config.direction
    );
    sorted
}
