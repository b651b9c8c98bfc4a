//! Static product catalog.
//!
//! The catalog is a fixed mapping from product ID to product record,
//! populated once at startup (from a JSON file or the built-in demo seed)
//! and never mutated afterwards. Lookup misses are ordinary: callers treat
//! them as no-ops, never as failures.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use saffron_core::{Price, ProductId};

/// Catalog loading errors.
///
/// Unlike the persisted cart slot, the catalog is startup data: a broken
/// catalog file is a real error, not something to silently paper over.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current price in minor currency units.
    pub price: Price,
    /// Pre-discount price; strictly greater than `price` when present.
    #[serde(rename = "oldPrice", default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Image reference for the rendering collaborator.
    pub image: String,
    /// Optional badge label ("New", "Featured", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Static registry of purchasable products.
///
/// Read-only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog from product records.
    ///
    /// Validation happens here so nothing downstream has to re-check it:
    /// a duplicate ID replaces the earlier record, and an `old_price` that
    /// is not strictly greater than `price` is dropped. Both are logged.
    #[must_use]
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut map = BTreeMap::new();
        for mut product in products {
            if let Some(old_price) = product.old_price
                && old_price <= product.price
            {
                warn!(
                    id = %product.id,
                    name = %product.name,
                    %old_price,
                    price = %product.price,
                    "dropping old_price that does not exceed price"
                );
                product.old_price = None;
            }
            if let Some(previous) = map.insert(product.id, product) {
                warn!(id = %previous.id, "duplicate product id in catalog, keeping the later record");
            }
        }
        Self { products: map }
    }

    /// Load a catalog from a JSON file holding an array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        Ok(Self::from_products(products))
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Iterate products in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The built-in demo catalog: eight electronics products.
    #[must_use]
    pub fn demo() -> Self {
        let product = |id: i64,
                       name: &str,
                       description: &str,
                       price: u64,
                       old_price: Option<u64>,
                       image: &str,
                       badge: Option<&str>| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::from_minor(price),
            old_price: old_price.map(Price::from_minor),
            image: image.to_string(),
            badge: badge.map(String::from),
        };

        Self::from_products([
            product(
                1,
                "iPhone 15 Pro",
                "Apple smartphone with a professional camera",
                25_000_000,
                Some(28_000_000),
                "images/iphone-15-pro.png",
                Some("Featured"),
            ),
            product(
                2,
                "ASUS Gaming Laptop",
                "High-end laptop for gaming and work",
                45_000_000,
                None,
                "images/asus-laptop.png",
                Some("New"),
            ),
            product(
                3,
                "AirPods Pro",
                "Wireless earbuds with outstanding sound",
                8_500_000,
                Some(10_000_000),
                "images/airpods-pro.jpg",
                None,
            ),
            product(
                4,
                "Apple Watch Series 9",
                "Smart watch with advanced health features",
                15_000_000,
                None,
                "images/apple-watch-9.png",
                Some("Bestseller"),
            ),
            product(
                5,
                "20000mAh Power Bank",
                "High-capacity portable charger",
                550_000,
                Some(750_000),
                "images/power-bank.png",
                None,
            ),
            product(
                6,
                "RGB Gaming Headset",
                "Pro headset with RGB lighting",
                2_800_000,
                None,
                "images/gaming-headset.png",
                Some("New"),
            ),
            product(
                7,
                "Pro Gaming Mouse",
                "High-precision mouse for gaming",
                1_200_000,
                Some(1_500_000),
                "images/gaming-mouse.png",
                None,
            ),
            product(
                8,
                "27\" 4K Monitor",
                "Professional monitor with superb image quality",
                12_000_000,
                None,
                "images/4k-monitor.png",
                None,
            ),
        ])
    }
}
