// crates/domain/src/pagination.rs
use serde::{Deserialize, Serialize};

use crate::layout::PageLayout;

/// One page of items together with the metadata needed to render navigation.
///
/// Serializes as a flat record; `previous_page` and `next_page` become
/// `null` at the boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub items: Vec<T>,
    /// Page numbers to offer for navigation, contiguous and ascending.
    pub pages: Vec<usize>,
    pub total_pages: usize,
    pub current_page: usize,
    /// Always 1.
    pub first_page: usize,
    /// Always equal to `total_pages`.
    pub last_page: usize,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub items_per_page: usize,
    pub total_items: u64,
    pub first_page_in_range: usize,
    pub last_page_in_range: usize,
}

/// Condensed view of a [`Pagination`] without its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub items_per_page: usize,
}

impl<T> Pagination<T> {
    pub fn from_layout(layout: &PageLayout, items: Vec<T>) -> Self {
        Self {
            items,
            pages: layout.window.pages(),
            total_pages: layout.total_pages.get(),
            current_page: layout.current_page.get(),
            first_page: 1,
            last_page: layout.total_pages.get(),
            previous_page: layout.previous_page().map(usize::from),
            next_page: layout.next_page().map(usize::from),
            items_per_page: layout.items_per_page.get(),
            total_items: layout.total_items.value(),
            first_page_in_range: layout.window.first().get(),
            last_page_in_range: layout.window.last().get(),
        }
    }

    pub const fn has_previous_page(&self) -> bool {
        self.previous_page.is_some()
    }

    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub const fn is_first_page(&self) -> bool {
        self.current_page == self.first_page
    }

    pub const fn is_last_page(&self) -> bool {
        self.current_page == self.last_page
    }

    /// Index of the first item of this page within the whole listing.
    pub const fn offset(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.items_per_page)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_next: self.has_next_page(),
            has_previous: self.has_previous_page(),
            items_per_page: self.items_per_page,
        }
    }

    /// Convert the items while keeping all page metadata.
    pub fn map_items<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            total_pages: self.total_pages,
            current_page: self.current_page,
            first_page: self.first_page,
            last_page: self.last_page,
            previous_page: self.previous_page,
            next_page: self.next_page,
            items_per_page: self.items_per_page,
            total_items: self.total_items,
            first_page_in_range: self.first_page_in_range,
            last_page_in_range: self.last_page_in_range,
        }
    }
}
