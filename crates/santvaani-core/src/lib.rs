//! # Santvaani Core
//!
//! Shared foundation for the Santvaani notification backend:
//! configuration, error handling, and the message types that flow
//! between the registry, dispatcher, scheduler, and mailer.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{Result, SantvaaniError};
pub use types::NotificationMessage;
