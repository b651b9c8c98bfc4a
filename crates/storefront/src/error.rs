//! Unified error handling for the storefront.
//!
//! Errors only occur at the boundaries: configuration loading, catalog
//! loading, and persistence writes. Cart operations on invalid input are
//! silent no-ops by design, so they never produce an error value.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog loading failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persistence operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Config(ConfigError::MissingEnvVar("SAFFRON_X".to_string()));
        assert_eq!(
            err.to_string(),
            "Config error: Missing environment variable: SAFFRON_X"
        );
    }
}
