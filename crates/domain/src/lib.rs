//! # Domain
//!
//! Pure pagination logic with no knowledge of where items come from:
//!
//! - [`config`]: paginator settings and their validation
//! - [`layout`]: page count, clamping and offset arithmetic
//! - [`window`]: the bounded run of page numbers shown for navigation
//! - [`pagination`]: the per-call result handed back to callers
//! - [`request`]: parsing of raw page parameters

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod layout;
pub mod pagination;
pub mod request;
pub mod window;

pub use config::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGES_IN_RANGE, PaginatorConfig, PaginatorConfigBuilder};
pub use layout::PageLayout;
pub use pagination::{PageInfo, Pagination};
pub use request::PageRequest;
pub use window::PageWindow;
