//! Pagination metadata from a total item count and a page size.
//!
//! A [`Paginator`] calls two caller-supplied providers, one counting the
//! items and one slicing a page of them, and returns a [`Pagination`]: the
//! resolved current page, total pages, the page's items, previous/next page
//! and a bounded window of page numbers for navigation.
//!
//! ```
//! use page_range::prelude::*;
//!
//! let rows: Vec<u32> = (1..=100).collect();
//! let paginator = Paginator::with_providers(
//!     PaginatorConfig::default(),
//!     || Ok::<u64, std::io::Error>(100),
//!     move |offset: usize, limit: usize| {
//!         Ok::<Vec<u32>, std::io::Error>(rows.iter().skip(offset).take(limit).copied().collect())
//!     },
//! );
//!
//! let page = paginator.paginate(10).unwrap();
//! assert_eq!(page.pages, vec![6, 7, 8, 9, 10]);
//! assert_eq!(page.next_page, None);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use page_range_domain::{
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGES_IN_RANGE, PageInfo, PageLayout, PageRequest, PageWindow, Pagination,
    PaginatorConfig, PaginatorConfigBuilder,
};
pub use page_range_ports::{InMemoryListing, ItemCounter, ItemSlicer};
pub use page_range_shared_kernel::{
    ConfigError, ConfigResult, DomainError, DomainResult, ItemCount, PageNumber, PageSize, PaginateError,
    ProviderKind,
};
pub use page_range_usecase::Paginator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::{
        InMemoryListing, ItemCounter, ItemSlicer, PageInfo, PageRequest, PaginateError, Pagination, Paginator,
        PaginatorConfig,
    };
}
