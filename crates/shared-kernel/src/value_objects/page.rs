// crates/shared-kernel/src/value_objects/page.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A strictly positive size: items per page or the width of a navigation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] when `value` is zero.
    pub fn new(value: usize) -> DomainResult<Self> {
        Self::try_from(value)
    }

    /// Const-friendly constructor for defaults and statics.
    pub const fn new_const(value: usize) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PageSize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new_const(value).ok_or_else(|| DomainError::InvalidConfiguration {
            reason: "size must be greater than 0".to_string(),
        })
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    #[inline]
    pub const fn new(value: usize) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }

    /// The page before this one, or `None` on the first page.
    pub const fn prev(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Caps the page at `last`, which is itself at least 1.
    pub fn min_with(self, last: Self) -> Self {
        std::cmp::min(self, last)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DomainError::InvalidPage { page: 0 })
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(DomainError::InvalidPage { page: value })
    }
}

impl From<PageNumber> for usize {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

impl PartialEq<usize> for PageNumber {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
