//! # Santvaani Scheduler
//!
//! Three fixed-time notification jobs, all pinned to Indian Standard
//! Time regardless of where the process runs:
//!
//! ```text
//! morning  06:00 IST  Panchang-based blessing (static fallback)
//! evening  18:00 IST  fixed reflection message
//! weekly   Mon 09:00  nearest festival 1-3 days out, else weekly wisdom
//! ```
//!
//! Jobs are named entries with a pure message builder `(now, panchang)
//! -> NotificationMessage`, so each one is testable with an injected
//! date. A job never lets an error escape its own boundary: Panchang or
//! dispatch failures degrade to a static fallback message.

pub mod cron;
pub mod engine;
pub mod jobs;

pub use cron::{ist_offset, next_run_from_cron};
pub use engine::{spawn_scheduler, JobStats, SchedulerEngine};
pub use jobs::{evening_message, morning_message, weekly_message, JobKind};
