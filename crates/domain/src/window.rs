// crates/domain/src/window.rs
use std::ops::RangeInclusive;

use page_range_shared_kernel::{PageNumber, PageSize};

/// Inclusive, ascending run of page numbers offered for navigation.
///
/// The run always lies within `[1, total_pages]` and holds
/// `min(width, total_pages)` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    first: PageNumber,
    last: PageNumber,
}

impl PageWindow {
    /// Centre a window of `width` pages on `current`, sliding it back inside
    /// `[1, total_pages]` when it would overhang either end.
    ///
    /// With an even `width` the current page sits just left of centre.
    pub fn around(current: PageNumber, total_pages: PageNumber, width: PageSize) -> Self {
        let total = total_pages.get();
        let width = width.get();

        if total <= width {
            return Self { first: PageNumber::FIRST, last: total_pages };
        }

        let current = current.get().min(total);
        let latest_start = total - width + 1;
        let start = current.saturating_sub(width / 2).clamp(1, latest_start);
        let end = start + width - 1;

        Self::from_bounds(start, end)
    }

    fn from_bounds(start: usize, end: usize) -> Self {
        // start >= 1 and end >= start are guaranteed by `around`.
        let first = PageNumber::new(start).unwrap_or(PageNumber::FIRST);
        let last = PageNumber::new(end).unwrap_or(first);
        Self { first, last }
    }

    #[inline]
    pub const fn first(&self) -> PageNumber {
        self.first
    }

    #[inline]
    pub const fn last(&self) -> PageNumber {
        self.last
    }

    pub fn contains(&self, page: PageNumber) -> bool {
        self.first <= page && page <= self.last
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.first.get()..=self.last.get()
    }

    pub fn pages(&self) -> Vec<usize> {
        self.range().collect()
    }
}
