//! Scheduler engine — the loop that checks and fires the fixed jobs.
//! Uses tokio::interval for zero-overhead ticking (sleeps between checks).

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use santvaani_core::types::NotificationMessage;
use santvaani_panchang::PanchangProvider;
use santvaani_push::Dispatcher;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::cron::{ist_offset, next_run_from_cron};
use crate::jobs::JobKind;

/// One entry in the fixed job table.
struct ScheduledJob {
    kind: JobKind,
    last_run: Option<DateTime<Utc>>,
    next_run: Option<DateTime<Utc>>,
    run_count: u32,
}

/// Job bookkeeping exposed over the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct JobStats {
    pub name: &'static str,
    pub cron: &'static str,
    pub last_run: Option<DateTime<Utc>>,
    pub next_run: Option<DateTime<Utc>>,
    pub run_count: u32,
}

/// Manages the three fixed IST jobs and builds their messages when due.
pub struct SchedulerEngine {
    jobs: Vec<ScheduledJob>,
    panchang: Arc<dyn PanchangProvider>,
    tz: FixedOffset,
}

impl SchedulerEngine {
    pub fn new(panchang: Arc<dyn PanchangProvider>) -> Self {
        let tz = ist_offset();
        let now = Utc::now();
        let jobs = [JobKind::Morning, JobKind::Evening, JobKind::Weekly]
            .into_iter()
            .map(|kind| ScheduledJob {
                kind,
                last_run: None,
                next_run: next_run_from_cron(kind.cron(), now, tz),
                run_count: 0,
            })
            .collect();
        Self { jobs, panchang, tz }
    }

    /// Stats for every job.
    pub fn stats(&self) -> Vec<JobStats> {
        self.jobs
            .iter()
            .map(|j| JobStats {
                name: j.kind.name(),
                cron: j.kind.cron(),
                last_run: j.last_run,
                next_run: j.next_run,
                run_count: j.run_count,
            })
            .collect()
    }

    /// Check for due jobs at `now` and build their messages.
    ///
    /// Builders absorb their own failures (fallback messages), so this
    /// never errors and one bad job cannot block the others.
    pub async fn tick_at(&mut self, now: DateTime<Utc>) -> Vec<NotificationMessage> {
        let mut messages = Vec::new();
        let local_now = now.with_timezone(&self.tz);

        for job in self.jobs.iter_mut() {
            let due = matches!(job.next_run, Some(next) if now >= next);
            if !due {
                continue;
            }

            tracing::info!("Job triggered: '{}'", job.kind.name());
            let message = job.kind.build(local_now, self.panchang.as_ref()).await;
            messages.push(message);

            job.last_run = Some(now);
            job.run_count += 1;
            job.next_run = next_run_from_cron(job.kind.cron(), now, self.tz);
        }

        messages
    }

    /// Tick against the wall clock.
    pub async fn tick(&mut self) -> Vec<NotificationMessage> {
        self.tick_at(Utc::now()).await
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

/// Run the scheduler loop as a background tokio task: tick, dispatch
/// every built message, log the outcome. Dispatch failures are logged
/// and never crash the loop.
pub async fn spawn_scheduler(
    engine: Arc<Mutex<SchedulerEngine>>,
    dispatcher: Arc<Dispatcher>,
    check_interval_secs: u64,
) {
    tracing::info!("Scheduler started (check every {check_interval_secs}s, IST schedule)");

    let mut interval = tokio::time::interval(std::time::Duration::from_secs(check_interval_secs));

    loop {
        interval.tick().await;

        let messages = {
            let mut eng = engine.lock().await;
            eng.tick().await
        };

        for message in &messages {
            let report = dispatcher.dispatch(message).await;
            if report.success {
                tracing::info!(
                    "[{}] delivered to {} device(s)",
                    message.title,
                    report.success_count
                );
            } else {
                tracing::warn!(
                    "[{}] dispatch failed: {}",
                    message.title,
                    report.error.as_deref().unwrap_or("unknown")
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use santvaani_panchang::StaticPanchangProvider;

    fn engine() -> SchedulerEngine {
        SchedulerEngine::new(Arc::new(StaticPanchangProvider::new()))
    }

    #[test]
    fn test_jobs_seeded_with_next_run() {
        let engine = engine();
        assert_eq!(engine.job_count(), 3);
        for job in engine.stats() {
            assert!(job.next_run.is_some(), "{} has no next_run", job.name);
            assert_eq!(job.run_count, 0);
        }
    }

    #[tokio::test]
    async fn test_tick_before_due_fires_nothing() {
        let mut engine = engine();
        // All next_run values are in the future relative to construction.
        let messages = engine.tick_at(Utc::now()).await;
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_due_job_fires_and_reschedules() {
        let mut engine = engine();
        // Force the morning job due in the past.
        let past = Utc.with_ymd_and_hms(2025, 10, 18, 0, 30, 0).unwrap();
        engine.jobs[0].next_run = Some(past);

        let now = Utc.with_ymd_and_hms(2025, 10, 18, 0, 31, 0).unwrap();
        let messages = engine.tick_at(now).await;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].title.contains("Good Morning"));

        let stats = engine.stats();
        assert_eq!(stats[0].run_count, 1);
        assert_eq!(stats[0].last_run, Some(now));
        assert!(stats[0].next_run.unwrap() > now);
    }

    #[tokio::test]
    async fn test_second_tick_does_not_refire() {
        let mut engine = engine();
        let past = Utc.with_ymd_and_hms(2025, 10, 18, 12, 30, 0).unwrap();
        engine.jobs[1].next_run = Some(past);

        let now = Utc.with_ymd_and_hms(2025, 10, 18, 12, 31, 0).unwrap();
        assert_eq!(engine.tick_at(now).await.len(), 1);
        // Same instant again: job already rescheduled for the future.
        assert!(engine.tick_at(now).await.is_empty());
    }
}
