//! # Santvaani Push
//!
//! Push notification delivery: a `PushProvider` trait over the FCM-style
//! multicast API, and a `Dispatcher` that broadcasts to every registered
//! token and prunes the ones the provider reports as dead.

pub mod dispatcher;
pub mod fcm;
pub mod provider;

pub use dispatcher::{Dispatcher, SendReport, SharedTokenStore};
pub use fcm::FcmProvider;
pub use provider::{MulticastOutcome, PushProvider, TokenResult, TOKEN_NOT_REGISTERED};
