//! Cart persistence adapters.
//!
//! The cart is serialized to a single key-value slot as a JSON array of
//! line objects (`{id, name, price, oldPrice?, image, badge?, quantity}`).
//! There is no schema version: anything that fails to deserialize into
//! that shape is treated as corrupt, logged, and replaced by an empty
//! cart. A broken slot must never block startup.

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, warn};

use crate::cart::CartLine;
use crate::sync::lock;

/// Persistence write errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write cart slot: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value slot for the cart line sequence.
///
/// `load` is infallible by contract: corruption is reported through the
/// log and degrades to an empty cart, because hydration happens during
/// initialization and a parse error there must not be fatal.
pub trait CartStorage: Send {
    /// Serialize the full line sequence into the slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError>;

    /// Deserialize the slot, or return an empty sequence when the slot is
    /// missing or corrupt.
    fn load(&self) -> Vec<CartLine>;
}

/// Parse a raw slot value, degrading to empty on corruption.
fn parse_slot(raw: &str) -> Vec<CartLine> {
    match serde_json::from_str(raw) {
        Ok(lines) => lines,
        Err(error) => {
            warn!(%error, "corrupt cart slot, starting with an empty cart");
            Vec::new()
        }
    }
}

/// File-backed cart slot holding one JSON document.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage adapter writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(lines)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn load(&self) -> Vec<CartLine> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => parse_slot(&raw),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted cart");
                Vec::new()
            }
            Err(error) => {
                warn!(%error, path = %self.path.display(), "unreadable cart slot, starting empty");
                Vec::new()
            }
        }
    }
}

/// In-process cart slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a raw value, corrupt or otherwise.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// The current raw slot value, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        lock(&self.slot).clone()
    }
}

impl CartStorage for MemoryStorage {
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(lines)?;
        *lock(&self.slot) = Some(raw);
        Ok(())
    }

    fn load(&self) -> Vec<CartLine> {
        lock(&self.slot).as_deref().map_or_else(Vec::new, parse_slot)
    }
}
