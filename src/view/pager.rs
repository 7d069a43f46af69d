use tracing::debug;

/// Rows per page on the listing screen
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One entry of the compact pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    /// One or more skipped page numbers
    Gap,
}

/// Number of pages needed for `count` rows
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Page numbers to render around `current`.
///
/// Always shows the first and last page plus the neighbours of `current`;
/// any run of hidden pages becomes a single gap.
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    let mut window = Vec::new();
    let mut last_shown = 0;

    for page in 1..=total {
        let shown = page == 1 || page == total || page.abs_diff(current) <= 1;
        if !shown {
            continue;
        }
        if last_shown != 0 && page - last_shown > 1 {
            window.push(PageMarker::Gap);
        }
        window.push(PageMarker::Page(page));
        last_shown = page;
    }

    window
}

/// Current page of a fixed-size pager (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Move to `page`; pages outside `1..=total_pages` are rejected
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        let total = self.total_pages(count);
        if page < 1 || page > total {
            debug!(page, total, "rejected page change");
            return false;
        }
        self.page = page;
        true
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull an out-of-range page back to the last valid one
    pub fn clamp(&mut self, count: usize) {
        let last = self.total_pages(count).max(1);
        if self.page > last {
            debug!(from = self.page, to = last, "clamping page");
            self.page = last;
        }
    }

    /// Index range of the current page within `count` rows
    pub fn range(&self, count: usize) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }
}
