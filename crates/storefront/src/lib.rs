//! Saffron Storefront - client-side storefront state.
//!
//! This crate owns everything a storefront page needs to track between user
//! interactions, with rendering left to a collaborator:
//!
//! - A static product [`catalog`]
//! - The [`cart`] store with local persistence via a [`storage`] adapter
//! - Stacking user [`notify`] notifications
//! - A [`view`] binder projecting cart state into display models
//! - [`widgets`] controllers: hero carousel (with autoplay), product
//!   carousel, drawer/overlay visibility toggles
//! - A simulated [`checkout`] flow
//!
//! # Architecture
//!
//! All mutations happen synchronously on discrete UI callbacks; there is one
//! logical thread of control. The only asynchronous elements are the hero
//! autoplay timer and the simulated checkout delay, both driven by `tokio`
//! timers. The cart store exclusively owns the line sequence and pushes
//! fresh snapshots to registered observers after every mutation, so no
//! component reaches into another's internals.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;
pub mod view;
pub mod widgets;

mod sync;

pub use cart::{CartEvent, CartLine, CartObserver, CartStore};
pub use catalog::{Catalog, Product};
pub use checkout::CheckoutOutcome;
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use state::AppState;
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use view::{CartLineView, CartView, RenderSurface, ViewBinder};
