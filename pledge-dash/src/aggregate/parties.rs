//! Per-party status breakdown
//!
//! A record counts toward every tracked party it names, so the per-party
//! totals can add up to more than the number of records.

use pledge_common::CommitmentRecord;
use serde::Serialize;

use super::summary::BucketCounts;

/// Status counts for one tracked party
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyBreakdown {
    pub party: String,
    #[serde(flatten)]
    pub counts: BucketCounts,
    pub total: usize,
}

/// Bucket counts for each of `tracked_parties`, in the given order
pub fn party_breakdown<'a, I>(records: I, tracked_parties: &[String]) -> Vec<PartyBreakdown>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let mut counts = vec![BucketCounts::default(); tracked_parties.len()];

    for record in records {
        let bucket = record.bucket();
        for (party, slot) in tracked_parties.iter().zip(counts.iter_mut()) {
            if record.names_party(party) {
                slot.add(bucket);
            }
        }
    }

    tracked_parties
        .iter()
        .zip(counts)
        .map(|(party, counts)| PartyBreakdown {
            party: party.clone(),
            total: counts.sum(),
            counts,
        })
        .collect()
}
