//! Aggregated chart views
//!
//! Each view is a pure function of a record set, typically the full
//! unfiltered dataset. Views are recomputed from scratch on every call.

pub mod categories;
pub mod parties;
pub mod summary;
pub mod timeline;
pub mod upcoming;

pub use categories::{top_categories, CategoryCount};
pub use parties::{party_breakdown, PartyBreakdown};
pub use summary::{summary_counts, BucketCounts, BucketPercentages, SummaryCounts};
pub use timeline::{delivery_timeline, TimelinePoint};
pub use upcoming::{upcoming_due, UpcomingCommitment};
