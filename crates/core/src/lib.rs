//! Saffron Core - Shared types library.
//!
//! This crate provides common types used across all Saffron components:
//! - `storefront` - Client-side storefront state (catalog, cart, widgets)
//! - `integration-tests` - End-to-end workspace tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no timers, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
