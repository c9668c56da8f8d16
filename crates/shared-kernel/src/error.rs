// crates/shared-kernel/src/error.rs
use std::fmt;

use thiserror::Error;

/// Identifies which caller-supplied provider a paginator is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Returns the total number of items.
    ItemCounter,
    /// Returns the items of a single page.
    ItemSlicer,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemCounter => f.write_str("item counter"),
            Self::ItemSlicer => f.write_str("item slicer"),
        }
    }
}

/// Errors detected by the paginator itself, before any provider is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid page number: {page} (pages start at 1)")]
    InvalidPage { page: i64 },

    #[error("Invalid page parameter '{raw}': expected a positive integer")]
    InvalidPageParameter { raw: String },

    #[error("Missing provider: no {provider} configured")]
    MissingProvider { provider: ProviderKind },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Result error of a pagination call.
///
/// Provider failures are carried as-is in [`PaginateError::Provider`]; both
/// `Display` and `source()` forward to the provider's error.
#[derive(Debug, Error)]
pub enum PaginateError<E> {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(E),
}

impl<E> PaginateError<E> {
    pub const fn is_invalid_page(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidPage { .. }))
    }

    pub const fn is_missing_provider(&self) -> bool {
        matches!(self, Self::Domain(DomainError::MissingProvider { .. }))
    }

    pub const fn domain_error(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Provider(_) => None,
        }
    }

    pub const fn provider_error(&self) -> Option<&E> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Domain(_) => None,
        }
    }

    /// Recovers the provider's original error, if that is what failed.
    pub fn into_provider_error(self) -> Option<E> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Domain(_) => None,
        }
    }
}

/// Errors raised while loading a paginator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {format} configuration: {details}")]
    Parse { format: String, details: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}
