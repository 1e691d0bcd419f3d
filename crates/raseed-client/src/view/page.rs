use serde::{Deserialize, Serialize};

/// How requested page numbers relate to the filtered row count.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Keep the page inside `[1, total_pages]` for the current filtered rows.
    #[default]
    Clamp,
    /// Accept any page >= 1; pages past the end render no rows.
    Unbounded,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based index of the first visible row; both bounds are 0 when the
    /// page is empty.
    pub first_row: usize,
    pub last_row: usize,
}

/// Number of pages for `total_rows`; an empty list still has one page.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_rows.div_ceil(size).max(1)
}

pub fn change_page(
    requested: usize,
    total_rows: usize,
    page_size: usize,
    policy: PagePolicy,
) -> usize {
    let requested = requested.max(1);
    match policy {
        PagePolicy::Clamp => requested.min(page_count(total_rows, page_size)),
        PagePolicy::Unbounded => requested,
    }
}

/// Slices one page out of already filtered and sorted rows.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> (&[T], PageInfo) {
    let size = page_size.max(1);
    let page = page.max(1);
    let total_rows = rows.len();
    let total_pages = page_count(total_rows, size);

    let start = (page - 1).saturating_mul(size).min(total_rows);
    let end = start.saturating_add(size).min(total_rows);
    let visible = &rows[start..end];

    let info = PageInfo {
        page,
        page_size: size,
        total_rows,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
        first_row: if visible.is_empty() { 0 } else { start + 1 },
        last_row: if visible.is_empty() { 0 } else { end },
    };
    (visible, info)
}
