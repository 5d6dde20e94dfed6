//! Commitment list filtering
//!
//! Constraints combine with AND across kinds. Within the party and status
//! sets any member matches (OR). An empty constraint matches everything, so
//! an all-empty [`FilterConfig`] is the identity. Input order is preserved.

use std::collections::BTreeSet;

use pledge_common::{CommitmentRecord, StatusBucket};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Active list filters, as selected in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against commitment, category,
    /// party and notes; empty means no constraint
    pub search_text: String,
    /// Allowed categories (exact match)
    pub categories: BTreeSet<String>,
    /// Allowed party names; a record matches if it names any of them
    pub parties: BTreeSet<String>,
    /// Allowed status buckets
    pub status_buckets: BTreeSet<StatusBucket>,
}

impl FilterConfig {
    /// Whether no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.categories.is_empty()
            && self.parties.is_empty()
            && self.status_buckets.is_empty()
    }

    /// Compile into a matcher that lowercases the search text once
    pub fn matcher(&self) -> RecordMatcher<'_> {
        RecordMatcher {
            config: self,
            needle: self.search_text.to_lowercase(),
        }
    }
}

/// A [`FilterConfig`] prepared for repeated matching
#[derive(Debug)]
pub struct RecordMatcher<'c> {
    config: &'c FilterConfig,
    needle: String,
}

impl RecordMatcher<'_> {
    /// Whether `record` satisfies every active constraint
    pub fn matches(&self, record: &CommitmentRecord) -> bool {
        self.matches_search(record)
            && self.matches_category(record)
            && self.matches_party(record)
            && self.matches_status(record)
    }

    fn matches_search(&self, record: &CommitmentRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            record.commitment(),
            record.category(),
            record.party(),
            record.notes(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }

    fn matches_category(&self, record: &CommitmentRecord) -> bool {
        let categories = &self.config.categories;
        categories.is_empty() || categories.contains(record.category())
    }

    fn matches_party(&self, record: &CommitmentRecord) -> bool {
        let parties = &self.config.parties;
        parties.is_empty() || record.parties().iter().any(|p| parties.contains(p))
    }

    fn matches_status(&self, record: &CommitmentRecord) -> bool {
        let buckets = &self.config.status_buckets;
        buckets.is_empty() || buckets.contains(&record.bucket())
    }
}

/// Keep the records satisfying `config`, in input order.
///
/// Accepts anything yielding record references, so an already-filtered
/// result can be filtered again.
pub fn filter_records<'a, I>(records: I, config: &FilterConfig) -> Vec<&'a CommitmentRecord>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let matcher = config.matcher();
    let kept: Vec<&CommitmentRecord> = records.into_iter().filter(|r| matcher.matches(r)).collect();
    debug!("Filter kept {} records", kept.len());
    kept
}
