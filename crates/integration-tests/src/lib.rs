//! Integration tests for the Saffron workspace.
//!
//! The tests live under `tests/` and exercise the storefront crate through
//! its public API only: hydration from a real file-backed slot, the full
//! mutate-persist-notify cycle, and the timer-driven pieces under a paused
//! tokio clock.

#![cfg_attr(not(test), forbid(unsafe_code))]
