//! Status bucket counts and percentages

use pledge_common::{CommitmentRecord, StatusBucket};
use serde::Serialize;

/// Number of records in each status bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub delivered: usize,
    pub failed: usize,
}

impl BucketCounts {
    /// Count one record in `bucket`
    pub fn add(&mut self, bucket: StatusBucket) {
        *self.slot(bucket) += 1;
    }

    pub fn get(&self, bucket: StatusBucket) -> usize {
        match bucket {
            StatusBucket::NotStarted => self.not_started,
            StatusBucket::InProgress => self.in_progress,
            StatusBucket::Delivered => self.delivered,
            StatusBucket::Failed => self.failed,
        }
    }

    /// Sum over all buckets
    pub fn sum(&self) -> usize {
        self.not_started + self.in_progress + self.delivered + self.failed
    }

    fn slot(&mut self, bucket: StatusBucket) -> &mut usize {
        match bucket {
            StatusBucket::NotStarted => &mut self.not_started,
            StatusBucket::InProgress => &mut self.in_progress,
            StatusBucket::Delivered => &mut self.delivered,
            StatusBucket::Failed => &mut self.failed,
        }
    }
}

/// Headline counts for the summary chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total: usize,
    #[serde(flatten)]
    pub counts: BucketCounts,
}

impl SummaryCounts {
    pub fn get(&self, bucket: StatusBucket) -> usize {
        self.counts.get(bucket)
    }

    /// Share of each bucket in whole percent; all zero for an empty set
    pub fn percentages(&self) -> BucketPercentages {
        let pct = |bucket| percent(self.get(bucket), self.total);
        BucketPercentages {
            not_started: pct(StatusBucket::NotStarted),
            in_progress: pct(StatusBucket::InProgress),
            delivered: pct(StatusBucket::Delivered),
            failed: pct(StatusBucket::Failed),
        }
    }
}

/// Whole-percent share of each status bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketPercentages {
    pub not_started: u32,
    pub in_progress: u32,
    pub delivered: u32,
    pub failed: u32,
}

/// `count / total` as a percentage rounded to the nearest integer
fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Count records per status bucket
pub fn summary_counts<'a, I>(records: I) -> SummaryCounts
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let mut summary = SummaryCounts::default();
    for record in records {
        summary.total += 1;
        summary.counts.add(record.bucket());
    }
    summary
}
