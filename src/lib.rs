//! Tribute API — Library Root
//!
//! Re-exports all modules for integration tests.

pub mod api;
pub mod config;
pub mod domain;
pub mod store;
