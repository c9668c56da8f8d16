// crates/domain/src/layout.rs
use page_range_shared_kernel::{ItemCount, PageNumber, PageSize};

use crate::{config::PaginatorConfig, window::PageWindow};

/// Everything about a page that can be known before its items are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub total_items: ItemCount,
    pub items_per_page: PageSize,
    pub total_pages: PageNumber,
    pub requested_page: PageNumber,
    pub current_page: PageNumber,
    pub window: PageWindow,
}

impl PageLayout {
    /// Resolve a requested page against the current item total.
    ///
    /// Requests past the end land on the last page; an empty listing still
    /// has a single (empty) page.
    pub fn resolve(total_items: ItemCount, requested_page: PageNumber, config: &PaginatorConfig) -> Self {
        let total_pages = PageNumber::new(total_items.pages(config.items_per_page)).unwrap_or(PageNumber::FIRST);
        let current_page = requested_page.min_with(total_pages);
        let window = PageWindow::around(current_page, total_pages, config.pages_in_range);

        Self {
            total_items,
            items_per_page: config.items_per_page,
            total_pages,
            requested_page,
            current_page,
            window,
        }
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page.get() - 1).saturating_mul(self.items_per_page.get())
    }

    #[inline]
    pub const fn limit(&self) -> usize {
        self.items_per_page.get()
    }

    pub fn was_clamped(&self) -> bool {
        self.requested_page != self.current_page
    }

    pub const fn previous_page(&self) -> Option<PageNumber> {
        self.current_page.prev()
    }

    pub fn next_page(&self) -> Option<PageNumber> {
        if self.current_page < self.total_pages {
            self.current_page.next()
        } else {
            None
        }
    }
}
