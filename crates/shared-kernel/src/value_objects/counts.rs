// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::PageSize;

/// Total number of items reported by a counting provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCount(u64);

impl ItemCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of pages needed to hold every item; an empty set still has one page.
    ///
    /// Saturates at `usize::MAX` on targets where the page count does not
    /// fit in `usize`.
    pub fn pages(self, per_page: PageSize) -> usize {
        let per_page = u64::try_from(per_page.get()).unwrap_or(u64::MAX);
        let pages = self.0.div_ceil(per_page).max(1);
        usize::try_from(pages).unwrap_or(usize::MAX)
    }
}

impl Default for ItemCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for ItemCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<ItemCount> for u64 {
    fn from(value: ItemCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for ItemCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
