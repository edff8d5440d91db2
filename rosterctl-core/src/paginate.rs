//! Client-side pagination arithmetic
//!
//! Pages are 1-based. Out-of-range pages are not an error, they are empty.

use serde::Serialize;

/// Rows per page in the table view
pub const PAGE_SIZE: usize = 10;

/// Slice `items[(page-1)*page_size .. page*page_size]`, clamped to the list
///
/// Page 0 and a zero page size both yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items: `ceil(len / page_size)`
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Summary of one page, used by the `list` output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            page,
            page_size,
            total_items,
            total_pages: page_count(total_items, page_size),
        }
    }

    /// 1-based index of the first row on this page, if any row exists
    pub fn first_row(&self) -> Option<usize> {
        let start = self.page.checked_sub(1)?.checked_mul(self.page_size)?;
        (start < self.total_items).then_some(start + 1)
    }

    /// 1-based index of the last row on this page, if any row exists
    pub fn last_row(&self) -> Option<usize> {
        self.first_row()
            .map(|first| (first + self.page_size - 1).min(self.total_items))
    }
}
