//! Canonical commitment records and the loaded dataset

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::normalize::RawRecord;
use crate::status::{classify, StatusBucket};

/// One government policy commitment after normalization
///
/// Records are immutable once built; every derived view is a fresh
/// projection over them. Construct through [`RawRecord::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitmentRecord {
    #[serde(rename = "Category")]
    pub(crate) category: String,
    #[serde(rename = "Commitment")]
    pub(crate) commitment: String,
    /// Party field as written, e.g. `National, ACT`
    #[serde(rename = "Party")]
    pub(crate) party: String,
    /// Trimmed party names split out of `party`
    #[serde(rename = "Parties")]
    pub(crate) parties: Vec<String>,
    #[serde(rename = "Status")]
    pub(crate) status: i64,
    #[serde(rename = "Updated")]
    pub(crate) updated: String,
    #[serde(skip)]
    pub(crate) updated_on: Option<NaiveDate>,
    #[serde(rename = "Due")]
    pub(crate) due: String,
    #[serde(skip)]
    pub(crate) due_on: Option<NaiveDate>,
    #[serde(rename = "Tags")]
    pub(crate) tags: Vec<String>,
    #[serde(rename = "References")]
    pub(crate) references: String,
    #[serde(rename = "LobbyFor")]
    pub(crate) lobby_for: String,
    #[serde(rename = "LobbyAgainst")]
    pub(crate) lobby_against: String,
    #[serde(rename = "Notes")]
    pub(crate) notes: String,
    #[serde(rename = "Metadata")]
    pub(crate) metadata: String,
}

impl CommitmentRecord {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn commitment(&self) -> &str {
        &self.commitment
    }

    /// Party field as written in the source
    pub fn party(&self) -> &str {
        &self.party
    }

    /// Party names attributed to this commitment
    pub fn parties(&self) -> &[String] {
        &self.parties
    }

    /// Whether `name` is one of this record's party names (exact match)
    pub fn names_party(&self, name: &str) -> bool {
        self.parties.iter().any(|p| p == name)
    }

    pub fn status(&self) -> i64 {
        self.status
    }

    /// Status bucket of this record
    pub fn bucket(&self) -> StatusBucket {
        classify(self.status)
    }

    /// `Updated` as written (possibly empty)
    pub fn updated(&self) -> &str {
        &self.updated
    }

    /// `Updated` as a calendar date, `None` when empty or unparseable
    pub fn updated_on(&self) -> Option<NaiveDate> {
        self.updated_on
    }

    /// `Due` as written (possibly empty)
    pub fn due(&self) -> &str {
        &self.due
    }

    /// `Due` as a calendar date, `None` when empty or unparseable
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_on
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn references(&self) -> &str {
        &self.references
    }

    pub fn lobby_for(&self) -> &str {
        &self.lobby_for
    }

    pub fn lobby_against(&self) -> &str {
        &self.lobby_against
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }
}

impl From<RawRecord> for CommitmentRecord {
    fn from(raw: RawRecord) -> Self {
        raw.normalize()
    }
}

/// The normalized record set of one data load
///
/// Built once, then only read. There is no mutable access; reloading means
/// building a new `Dataset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CommitmentRecord>,
}

impl Dataset {
    /// Normalize every raw row into a dataset
    pub fn from_raw<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let records: Vec<CommitmentRecord> = rows.into_iter().map(RawRecord::normalize).collect();
        info!("Normalized {} commitment records", records.len());
        Self { records }
    }

    pub fn records(&self) -> &[CommitmentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommitmentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CommitmentRecord;
    type IntoIter = std::slice::Iter<'a, CommitmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
