//! # Ports
//!
//! Interface definitions for the caller-supplied data providers.
//!
//! - [`provider::ItemCounter`]: reports how many items exist in total
//! - [`provider::ItemSlicer`]: fetches the items of one page
//!
//! Plain closures implement both traits, so most callers never name them;
//! [`provider::InMemoryListing`] covers data that is already loaded.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod provider;

pub use provider::{InMemoryListing, ItemCounter, ItemSlicer};
