//! # Santvaani Gateway
//!
//! HTTP API consumed by the web frontend: device token registration,
//! test notification sends, and scheduler/registry stats.

pub mod routes;
pub mod server;

pub use server::{build_router, serve, AppState};
