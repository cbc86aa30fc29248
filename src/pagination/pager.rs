//! Caller-side pagination state for a table of rows

use serde::Serialize;
use std::ops::Range;

use super::generator::generate;
use crate::models::{PageList, PageSlot, PagerOptions, PaginationError};

/// Number of pages needed for `item_count` rows, `per_page` rows each.
pub fn total_pages(item_count: usize, per_page: usize) -> Result<i64, PaginationError> {
    if per_page == 0 {
        return Err(PaginationError::InvalidPerPage);
    }
    i64::try_from(item_count.div_ceil(per_page))
        .map_err(|_| PaginationError::TooManyPages(item_count))
}

/// Half-open range of row indices shown on `page`, clipped to `item_count`.
pub fn row_range(item_count: usize, per_page: usize, page: i64) -> Range<usize> {
    let index = usize::try_from(page.saturating_sub(1)).unwrap_or(0);
    let start = index.saturating_mul(per_page).min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    start..end
}

/// Everything a renderer needs to draw one page of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub current_page: i64,
    pub total_pages: i64,
    pub page_list: PageList,
    pub has_previous: bool,
    pub has_next: bool,
    pub rows: Range<usize>,
}

/// Tracks the current page of a table and moves between pages.
///
/// Requests for pages outside `1..=total_pages` are rejected and leave the
/// pager where it was.
#[derive(Debug, Clone)]
pub struct Pager {
    item_count: usize,
    options: PagerOptions,
    total_pages: i64,
    current_page: i64,
}

impl Pager {
    pub fn new(item_count: usize, options: PagerOptions) -> Result<Self, PaginationError> {
        options.validate()?;
        let total_pages = total_pages(item_count, options.per_page)?;

        Ok(Self {
            item_count,
            options,
            total_pages,
            current_page: 1,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn has_previous(&self) -> bool {
        self.total_pages > 0 && self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Jump to `page`.
    pub fn go_to(&mut self, page: i64) -> Result<PageView, PaginationError> {
        if page < 1 || page > self.total_pages {
            tracing::debug!(page, total_pages = self.total_pages, "rejected page change");
            return Err(PaginationError::PageOutOfRange {
                page,
                total_pages: self.total_pages,
            });
        }

        tracing::debug!(from = self.current_page, to = page, "changing page");
        self.current_page = page;
        Ok(self.view())
    }

    pub fn next(&mut self) -> Result<PageView, PaginationError> {
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> Result<PageView, PaginationError> {
        self.go_to(self.current_page - 1)
    }

    /// Handle a click on a rendered slot. Gaps are not clickable.
    pub fn select(&mut self, slot: PageSlot) -> Result<Option<PageView>, PaginationError> {
        match slot {
            PageSlot::Page(page) => self.go_to(page).map(Some),
            PageSlot::Gap => Ok(None),
        }
    }

    pub fn view(&self) -> PageView {
        let page_list = if self.total_pages == 0 {
            PageList::default()
        } else {
            generate(self.total_pages, self.current_page, self.options.pagination_size)
        };

        PageView {
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_list,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            rows: if self.total_pages == 0 {
                0..0
            } else {
                row_range(self.item_count, self.options.per_page, self.current_page)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 7), Ok(0));
        assert_eq!(total_pages(7, 7), Ok(1));
        assert_eq!(total_pages(8, 7), Ok(2));
        assert_eq!(total_pages(50, 7), Ok(8));
        assert_eq!(total_pages(5, 0), Err(PaginationError::InvalidPerPage));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_total_pages_overflow() {
        assert_eq!(total_pages(usize::MAX, 1), Err(PaginationError::TooManyPages(usize::MAX)));
        assert_eq!(total_pages(usize::MAX, 4), Ok(1 << 62));
    }

    #[test]
    fn test_row_range() {
        assert_eq!(row_range(50, 7, 1), 0..7);
        assert_eq!(row_range(50, 7, 2), 7..14);
        assert_eq!(row_range(50, 7, 8), 49..50);
        assert_eq!(row_range(50, 7, 9), 50..50);
        assert_eq!(row_range(50, 7, 0), 0..7);
    }

    #[test]
    fn test_rejected_change_keeps_page() {
        let mut pager = Pager::new(50, PagerOptions::default()).unwrap();
        pager.go_to(3).unwrap();
        assert!(pager.go_to(9).is_err());
        assert_eq!(pager.current_page(), 3);
    }
}
