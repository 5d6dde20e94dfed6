//! Upcoming due dates

use chrono::NaiveDate;
use pledge_common::{CommitmentRecord, StatusBucket};
use serde::Serialize;

/// A commitment due on or after the reference day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingCommitment {
    pub commitment: String,
    pub category: String,
    /// `Due` as written in the source
    pub due: String,
    pub due_on: NaiveDate,
    pub status: i64,
    pub bucket: StatusBucket,
}

/// Commitments due on or after `today`, soonest first, at most `limit`.
///
/// `today` is supplied by the caller. Records with an empty or unparseable
/// `Due` are skipped. Commitments due on the same day keep input order.
///
/// Comparison is by calendar day: a commitment due on `today` stays listed
/// for the whole of that day rather than dropping out after midnight.
pub fn upcoming_due<'a, I>(records: I, today: NaiveDate, limit: usize) -> Vec<UpcomingCommitment>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let mut upcoming: Vec<(NaiveDate, &CommitmentRecord)> = records
        .into_iter()
        .filter_map(|record| record.due_on().map(|due| (due, record)))
        .filter(|(due, _)| *due >= today)
        .collect();

    upcoming.sort_by_key(|(due, _)| *due);
    upcoming.truncate(limit);

    upcoming
        .into_iter()
        .map(|(due_on, record)| UpcomingCommitment {
            commitment: record.commitment().to_string(),
            category: record.category().to_string(),
            due: record.due().to_string(),
            due_on,
            status: record.status(),
            bucket: record.bucket(),
        })
        .collect()
}
