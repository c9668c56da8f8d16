// crates/domain/src/request.rs
use std::str::FromStr;

use page_range_shared_kernel::{DomainError, DomainResult, PageNumber};
use serde::{Deserialize, Serialize};

/// A validated, 1-based page request as received from a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRequest(PageNumber);

impl PageRequest {
    pub const fn new(page: PageNumber) -> Self {
        Self(page)
    }

    /// Interpret an optional raw page parameter, e.g. a `?page=` query value.
    ///
    /// An absent parameter means the first page. Anything that is not a
    /// positive integer is rejected.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            Some(value) => value.parse(),
            None => Ok(Self::default()),
        }
    }

    #[inline]
    pub const fn page(self) -> PageNumber {
        self.0
    }
}

impl FromStr for PageRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let page: i64 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidPageParameter { raw: s.to_string() })?;
        PageNumber::try_from(page).map(Self)
    }
}

impl TryFrom<i64> for PageRequest {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        PageNumber::try_from(value).map(Self)
    }
}

impl From<PageNumber> for PageRequest {
    fn from(page: PageNumber) -> Self {
        Self(page)
    }
}
