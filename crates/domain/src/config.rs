// crates/domain/src/config.rs
use derive_builder::Builder;
use page_range_shared_kernel::{ConfigResult, DomainError, DomainResult, PageSize};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: PageSize = match PageSize::new_const(10) {
    Some(size) => size,
    None => panic!("default items per page must be non-zero"),
};

pub const DEFAULT_PAGES_IN_RANGE: PageSize = match PageSize::new_const(5) {
    Some(size) => size,
    None => panic!("default pages in range must be non-zero"),
};

/// Settings of a paginator. Both sizes are at least 1 by construction.
///
/// ```
/// use page_range_domain::PaginatorConfig;
///
/// let config = PaginatorConfig::builder()
///     .try_items_per_page(25usize)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.items_per_page.get(), 25);
/// assert_eq!(config.pages_in_range.get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder, Serialize, Deserialize)]
#[builder(try_setter, setter(into))]
#[serde(try_from = "RawPaginatorConfig")]
pub struct PaginatorConfig {
    #[builder(default = "DEFAULT_ITEMS_PER_PAGE")]
    pub items_per_page: PageSize,
    #[builder(default = "DEFAULT_PAGES_IN_RANGE")]
    pub pages_in_range: PageSize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            pages_in_range: DEFAULT_PAGES_IN_RANGE,
        }
    }
}

impl PaginatorConfig {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] naming the offending field
    /// when either value is zero.
    pub fn new(items_per_page: usize, pages_in_range: usize) -> DomainResult<Self> {
        Ok(Self {
            items_per_page: non_zero("items_per_page", items_per_page)?,
            pages_in_range: non_zero("pages_in_range", pages_in_range)?,
        })
    }

    pub fn builder() -> PaginatorConfigBuilder {
        PaginatorConfigBuilder::default()
    }

    /// Parse a JSON document; missing fields fall back to the defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed input or unknown fields,
    /// [`ConfigError::Domain`] when a size is zero.
    ///
    /// [`ConfigError::Parse`]: page_range_shared_kernel::ConfigError::Parse
    /// [`ConfigError::Domain`]: page_range_shared_kernel::ConfigError::Domain
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        let raw: RawPaginatorConfig = serde_json::from_str(input)?;
        Ok(Self::try_from(raw)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        let raw: RawPaginatorConfig = serde_yaml::from_str(input)?;
        Ok(Self::try_from(raw)?)
    }
}

/// Unvalidated settings as they appear in a configuration document.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPaginatorConfig {
    items_per_page: usize,
    pages_in_range: usize,
}

impl Default for RawPaginatorConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE.get(),
            pages_in_range: DEFAULT_PAGES_IN_RANGE.get(),
        }
    }
}

impl TryFrom<RawPaginatorConfig> for PaginatorConfig {
    type Error = DomainError;

    fn try_from(raw: RawPaginatorConfig) -> Result<Self, Self::Error> {
        Self::new(raw.items_per_page, raw.pages_in_range)
    }
}

fn non_zero(field: &str, value: usize) -> DomainResult<PageSize> {
    PageSize::new_const(value).ok_or_else(|| DomainError::InvalidConfiguration {
        reason: format!("{field} must be greater than 0"),
    })
}
