// crates/ports/src/provider.rs
use std::{convert::Infallible, sync::Arc};

/// Port for counting the items of a listing.
pub trait ItemCounter: Send + Sync {
    type Error;

    fn count(&self) -> Result<u64, Self::Error>;
}

/// Port for fetching at most `limit` items starting at `offset`.
pub trait ItemSlicer: Send + Sync {
    type Item;
    type Error;

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Self::Item>, Self::Error>;
}

impl<F, E> ItemCounter for F
where
    F: Fn() -> Result<u64, E> + Send + Sync,
{
    type Error = E;

    fn count(&self) -> Result<u64, E> {
        self()
    }
}

impl<F, T, E> ItemSlicer for F
where
    F: Fn(usize, usize) -> Result<Vec<T>, E> + Send + Sync,
{
    type Item = T;
    type Error = E;

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>, E> {
        self(offset, limit)
    }
}

/// Serves a listing that is already held in memory as both providers.
#[derive(Debug)]
pub struct InMemoryListing<T> {
    items: Arc<[T]>,
}

impl<T> InMemoryListing<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self { items: items.into() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Clone for InMemoryListing<T> {
    fn clone(&self) -> Self {
        Self { items: Arc::clone(&self.items) }
    }
}

impl<T> FromIterator<T> for InMemoryListing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> ItemCounter for InMemoryListing<T>
where
    T: Send + Sync,
{
    type Error = Infallible;

    fn count(&self) -> Result<u64, Infallible> {
        Ok(self.items.len() as u64)
    }
}

impl<T> ItemSlicer for InMemoryListing<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Error = Infallible;

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>, Infallible> {
        let start = offset.min(self.items.len());
        let end = start.saturating_add(limit).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}
