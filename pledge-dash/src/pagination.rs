//! Pagination of the commitment list

use serde::Serialize;

/// Default page size for the commitment list
pub const PAGE_SIZE: usize = 100;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Index of the first row on this page
    pub offset: usize,
}

impl Pagination {
    /// Index range of this page's rows within a list of `total_results`
    pub fn range(&self, total_results: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total_results);
        let end = (self.offset + self.page_size).min(total_results);
        start..end
    }
}

/// Calculate pagination metadata from total results and requested page
///
/// Ensures page is within valid bounds [1, total_pages]. A zero page size is
/// treated as one row per page.
///
/// # Examples
/// ```
/// use pledge_dash::pagination::calculate_pagination;
///
/// // 250 total results = 3 pages (100 + 100 + 50)
/// let p = calculate_pagination(250, 2, 100);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.offset, 100);
///
/// // Requesting out-of-bounds page gets clamped
/// let p = calculate_pagination(250, 99, 100);
/// assert_eq!(p.page, 3);  // Clamped to last page
/// assert_eq!(p.offset, 200);
/// ```
pub fn calculate_pagination(total_results: usize, requested_page: usize, page_size: usize) -> Pagination {
    let page_size = page_size.max(1);
    let total_pages = total_results.div_ceil(page_size);
    let page = requested_page.max(1).min(total_pages.max(1));
    let offset = (page - 1) * page_size;

    Pagination {
        page,
        page_size,
        total_pages,
        offset,
    }
}

/// Slice one page out of `items`
pub fn paginate<T>(items: &[T], requested_page: usize, page_size: usize) -> (Pagination, &[T]) {
    let p = calculate_pagination(items.len(), requested_page, page_size);
    let rows = &items[p.range(items.len())];
    (p, rows)
}
