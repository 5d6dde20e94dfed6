//! Monthly delivery timeline
//!
//! Counts delivered commitments by the month of their `Updated` date, over a
//! fixed month window. Records without a usable `Updated` date, or dated
//! outside the window, are left out.

use std::collections::BTreeMap;

use pledge_common::config::TimelineWindow;
use pledge_common::dates::Month;
use pledge_common::{CommitmentRecord, StatusBucket};
use serde::Serialize;
use tracing::debug;

/// Deliveries in one month of the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub month: Month,
    /// Display label, e.g. `Dec 2023`
    pub label: String,
    pub delivered: usize,
    /// Deliveries from the start of the window through this month
    pub cumulative: usize,
}

/// One point per month of `window`, in calendar order
pub fn delivery_timeline<'a, I>(records: I, window: &TimelineWindow) -> Vec<TimelinePoint>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let mut per_month: BTreeMap<Month, usize> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        if record.bucket() != StatusBucket::Delivered {
            continue;
        }
        match record.updated_on().map(Month::of) {
            Some(month) if month >= window.start && month <= window.end => {
                *per_month.entry(month).or_default() += 1;
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("{} delivered records outside the timeline window", skipped);
    }

    let mut cumulative = 0;
    Month::range_inclusive(window.start, window.end)
        .into_iter()
        .map(|month| {
            let delivered = per_month.get(&month).copied().unwrap_or(0);
            cumulative += delivered;
            TimelinePoint {
                month,
                label: month.label(),
                delivered,
                cumulative,
            }
        })
        .collect()
}
