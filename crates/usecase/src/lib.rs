//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`paginator`]: resolves a requested page by calling the counting and
//!   slicing providers, then assembles the pagination result
//!
//! Use cases depend on both domain and ports; providers are supplied by the
//! caller.

#![allow(clippy::multiple_crate_versions)]

pub mod paginator;

pub use paginator::Paginator;
