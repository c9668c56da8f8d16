// tests/common/mod.rs
//! Shared fixtures for the integration tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use page_range::prelude::*;

/// In-memory table of numbered rows that records how often it was queried.
#[derive(Clone, Default)]
pub struct Table {
    rows: u64,
    counts: Arc<AtomicUsize>,
    slices: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl Table {
    pub fn with_rows(rows: u64) -> Self {
        Self { rows, ..Self::default() }
    }

    pub fn count_calls(&self) -> usize {
        self.counts.load(Ordering::SeqCst)
    }

    pub fn slice_calls(&self) -> usize {
        self.slices.load(Ordering::SeqCst)
    }

    pub fn paginator(&self, per_page: usize, in_range: usize) -> Paginator<u64, std::convert::Infallible> {
        let config = PaginatorConfig::new(per_page, in_range).expect("valid config");
        Paginator::with_providers(config, self.clone(), self.clone())
    }
}

impl ItemCounter for Table {
    type Error = std::convert::Infallible;

    fn count(&self) -> Result<u64, Self::Error> {
        self.counts.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows)
    }
}

impl ItemSlicer for Table {
    type Item = u64;
    type Error = std::convert::Infallible;

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<u64>, Self::Error> {
        self.slices.fetch_add(1, Ordering::SeqCst);
        let start = (offset as u64).min(self.rows);
        let end = (start + limit as u64).min(self.rows);
        Ok((start..end).map(|row| row + 1).collect())
    }
}
