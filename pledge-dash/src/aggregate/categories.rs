//! Most common categories

use std::collections::HashMap;

use pledge_common::CommitmentRecord;
use serde::Serialize;

/// Number of records in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Categories by descending record count, truncated to `limit`.
///
/// Categories with equal counts keep the order in which they first appear.
pub fn top_categories<'a, I>(records: I, limit: usize) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a CommitmentRecord>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        let category = record.category();
        match index.get(category) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(category, counts.len());
                counts.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable, so ties stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
