//! HTTP API - axum router, handlers, and server loop.

pub mod handlers;
pub mod server;

pub use server::{router, ApiServer};
