//! Derived views handed to renderers
//!
//! Every view here is computed afresh from the dataset and the caller's
//! current selection. Nothing is cached, so a changed selection or a reload
//! only needs the view to be requested again.

use chrono::NaiveDate;
use pledge_common::config::DashboardConfig;
use pledge_common::CommitmentRecord;
use serde::Serialize;

use crate::aggregate::{
    delivery_timeline, party_breakdown, summary_counts, top_categories, upcoming_due,
    BucketPercentages, CategoryCount, PartyBreakdown, SummaryCounts, TimelinePoint,
    UpcomingCommitment,
};
use crate::filter::{filter_records, FilterConfig};
use crate::pagination::{paginate, Pagination};
use crate::sort::{sort_records, SortConfig};

/// Filter, then optionally sort, for the commitment list
pub fn filter_and_sort<'a, I>(
    records: I,
    filter: &FilterConfig,
    sort: Option<&SortConfig>,
) -> Vec<&'a CommitmentRecord>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let filtered = filter_records(records, filter);
    match sort {
        Some(sort) => sort_records(filtered, sort),
        None => filtered,
    }
}

/// One page of the filtered and sorted commitment list
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<'a> {
    /// Records matching the filter, across all pages
    pub total_results: usize,
    #[serde(flatten)]
    pub pagination: Pagination,
    pub rows: Vec<&'a CommitmentRecord>,
}

/// Build one page of the commitment list
pub fn list_page<'a, I>(
    records: I,
    filter: &FilterConfig,
    sort: Option<&SortConfig>,
    page: usize,
    page_size: usize,
) -> ListPage<'a>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let matching = filter_and_sort(records, filter, sort);
    let (pagination, rows) = paginate(&matching, page, page_size);
    ListPage {
        total_results: matching.len(),
        pagination,
        rows: rows.to_vec(),
    }
}

/// Every chart view of the dashboard at once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub summary: SummaryCounts,
    pub percentages: BucketPercentages,
    pub parties: Vec<PartyBreakdown>,
    pub categories: Vec<CategoryCount>,
    pub timeline: Vec<TimelinePoint>,
    pub upcoming: Vec<UpcomingCommitment>,
}

impl DashboardSnapshot {
    /// Compute all chart views over `records`
    pub fn compute(records: &[CommitmentRecord], config: &DashboardConfig, today: NaiveDate) -> Self {
        let summary = summary_counts(records);
        Self {
            percentages: summary.percentages(),
            summary,
            parties: party_breakdown(records, &config.tracked_parties),
            categories: top_categories(records, config.top_categories),
            timeline: delivery_timeline(records, &config.timeline),
            upcoming: upcoming_due(records, today, config.upcoming_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortDirection, SortKey};
    use pledge_common::{RawRecord, RawStatus, StatusBucket};
    use std::collections::BTreeSet;

    fn record(commitment: &str, category: &str, status: i64, due: &str) -> CommitmentRecord {
        RawRecord {
            commitment: Some(commitment.to_string()),
            category: Some(category.to_string()),
            party: Some("National".to_string()),
            status: Some(RawStatus::Int(status)),
            due: Some(due.to_string()),
            updated: Some("15/01/24".to_string()),
            ..Default::default()
        }
        .normalize()
    }

    fn sample() -> Vec<CommitmentRecord> {
        vec![
            record("a", "Tax", 100, "15/03/25"),
            record("b", "Health", 0, ""),
            record("c", "Tax", 30, "01/01/25"),
            record("d", "Tax", -1, "01/06/25"),
        ]
    }

    #[test]
    fn test_filter_then_sort() {
        let records = sample();
        let filter = FilterConfig {
            categories: BTreeSet::from(["Tax".to_string()]),
            ..Default::default()
        };
        let sort = SortConfig::new(SortKey::Due, SortDirection::Asc);

        let view = filter_and_sort(&records, &filter, Some(&sort));
        let names: Vec<&str> = view.iter().map(|r| r.commitment()).collect();
        assert_eq!(names, vec!["c", "a", "d"]);
    }

    #[test]
    fn test_without_sort_keeps_input_order() {
        let records = sample();
        let view = filter_and_sort(&records, &FilterConfig::default(), None);
        let names: Vec<&str> = view.iter().map(|r| r.commitment()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_list_page() {
        let records = sample();
        let filter = FilterConfig {
            status_buckets: BTreeSet::from([StatusBucket::NotStarted, StatusBucket::InProgress, StatusBucket::Failed]),
            ..Default::default()
        };

        let page = list_page(&records, &filter, None, 2, 2);
        assert_eq!(page.total_results, 3);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].commitment(), "d");
    }

    #[test]
    fn test_snapshot_over_empty_dataset() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let snapshot = DashboardSnapshot::compute(&[], &DashboardConfig::default(), today);

        assert_eq!(snapshot.summary.total, 0);
        assert_eq!(snapshot.percentages, BucketPercentages::default());
        assert_eq!(snapshot.parties.len(), 3);
        assert!(snapshot.categories.is_empty());
        assert_eq!(snapshot.timeline.len(), 36);
        assert!(snapshot.upcoming.is_empty());
    }

    #[test]
    fn test_snapshot_views_agree() {
        let records = sample();
        let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let snapshot = DashboardSnapshot::compute(&records, &DashboardConfig::default(), today);

        assert_eq!(snapshot.summary.total, 4);
        assert_eq!(snapshot.percentages.delivered, 25);
        assert_eq!(snapshot.parties[0].total, 4);
        assert_eq!(snapshot.categories[0].category, "Tax");
        assert_eq!(snapshot.categories[0].count, 3);
        assert_eq!(snapshot.timeline.last().map(|p| p.cumulative), Some(1));
        let upcoming: Vec<&str> = snapshot.upcoming.iter().map(|u| u.commitment.as_str()).collect();
        assert_eq!(upcoming, vec!["a", "d"]);
    }
}
