pub mod pager;
pub mod sort;

pub use pager::{page_window, total_pages, PageMarker, Pager, DEFAULT_PAGE_SIZE};
pub use sort::{sort_properties, SortDirection, SortKey, SortState};

use crate::models::Property;

/// One rendered page of the listing table
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub items: Vec<&'a Property>,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: Vec<PageMarker>,
    /// Rows across all pages
    pub total_items: usize,
}

impl PageView<'_> {
    /// No rows at all; show the empty-state message instead of a table
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn show_pager(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Sort `records` and cut out the pager's current page
pub fn sort_and_paginate<'a>(
    mut records: Vec<&'a Property>,
    sort: &SortState,
    pager: &Pager,
) -> PageView<'a> {
    sort_properties(&mut records, sort);

    let total_items = records.len();
    let total_pages = pager.total_pages(total_items);
    let range = pager.range(total_items);
    let items = records[range].to_vec();

    PageView {
        items,
        current_page: pager.page(),
        total_pages,
        window: page_window(pager.page(), total_pages),
        total_items,
    }
}
