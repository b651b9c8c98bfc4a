//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults reproduce the stock storefront.
//!
//! - `SAFFRON_CART_PATH` - Path of the persisted cart slot (default: cart.json)
//! - `SAFFRON_CATALOG_PATH` - Path of a catalog JSON file (default: built-in demo catalog)
//! - `SAFFRON_AUTOPLAY_MS` - Hero autoplay interval in milliseconds (default: 5000)
//! - `SAFFRON_NOTIFICATION_MS` - Notification auto-dismiss in milliseconds (default: 4000)
//! - `SAFFRON_CHECKOUT_DELAY_MS` - Simulated checkout delay in milliseconds (default: 2000)
//! - `SAFFRON_HERO_SLIDES` - Number of hero slides (default: 3)
//! - `SAFFRON_VISIBLE_PRODUCTS` - Product carousel page size (default: 4)
//! - `SAFFRON_PRODUCT_ITEM_WIDTH` - Product card width incl. gap, in pixels (default: 312)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_CART_PATH: &str = "cart.json";
const DEFAULT_AUTOPLAY_MS: u64 = 5_000;
const DEFAULT_NOTIFICATION_MS: u64 = 4_000;
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2_000;
const DEFAULT_HERO_SLIDES: usize = 3;
const DEFAULT_VISIBLE_PRODUCTS: usize = 4;
const DEFAULT_PRODUCT_ITEM_WIDTH: u32 = 312;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path of the persisted cart slot
    pub cart_path: PathBuf,
    /// Path of a catalog JSON file; `None` uses the built-in demo catalog
    pub catalog_path: Option<PathBuf>,
    /// Hero autoplay interval
    pub autoplay_interval: Duration,
    /// Notification auto-dismiss interval
    pub notification_ttl: Duration,
    /// Simulated checkout delay
    pub checkout_delay: Duration,
    /// Number of hero slides
    pub hero_slides: usize,
    /// Product carousel page size
    pub visible_products: usize,
    /// Product card width including gap, in pixels
    pub product_item_width: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_path: PathBuf::from(DEFAULT_CART_PATH),
            catalog_path: None,
            autoplay_interval: Duration::from_millis(DEFAULT_AUTOPLAY_MS),
            notification_ttl: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            hero_slides: DEFAULT_HERO_SLIDES,
            visible_products: DEFAULT_VISIBLE_PRODUCTS,
            product_item_width: DEFAULT_PRODUCT_ITEM_WIDTH,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a set variable fails to
    /// parse. Unset variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            cart_path: optional_var("SAFFRON_CART_PATH")
                .map_or(defaults.cart_path, PathBuf::from),
            catalog_path: optional_var("SAFFRON_CATALOG_PATH").map(PathBuf::from),
            autoplay_interval: duration_var("SAFFRON_AUTOPLAY_MS", DEFAULT_AUTOPLAY_MS)?,
            notification_ttl: duration_var("SAFFRON_NOTIFICATION_MS", DEFAULT_NOTIFICATION_MS)?,
            checkout_delay: duration_var("SAFFRON_CHECKOUT_DELAY_MS", DEFAULT_CHECKOUT_DELAY_MS)?,
            hero_slides: parsed_var("SAFFRON_HERO_SLIDES", DEFAULT_HERO_SLIDES)?,
            visible_products: parsed_var("SAFFRON_VISIBLE_PRODUCTS", DEFAULT_VISIBLE_PRODUCTS)?,
            product_item_width: parsed_var(
                "SAFFRON_PRODUCT_ITEM_WIDTH",
                DEFAULT_PRODUCT_ITEM_WIDTH,
            )?,
        })
    }
}

/// Read an optional environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read an optional variable parsed with `FromStr`, with a default.
fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    optional_var(name).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
    })
}

/// Read an optional millisecond variable as a `Duration`, with a default.
fn duration_var(name: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    parsed_var(name, default_ms).map(Duration::from_millis)
}
