use crate::feeds::{FeedData, FeedFetcher, FeedMessage, JobKind};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("job {0:?} needs an interval greater than zero")]
    ZeroInterval(JobKind),
}

pub struct Job {
    pub kind: JobKind,
    pub interval: Duration,
    pub fetcher: Arc<dyn FeedFetcher>,
}

impl Job {
    pub fn new(kind: JobKind, interval: Duration, fetcher: impl FeedFetcher + 'static) -> Self {
        Self {
            kind,
            interval,
            fetcher: Arc::new(fetcher),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobHandle {
    pub id: usize,
    pub kind: JobKind,
}

/// Runs each job once straight away and then on its interval, sending every
/// outcome down one channel.
///
/// Each tick spawns its own fetch. A slow fetch is never waited on, so two
/// runs of the same job can be in flight at once.
pub struct Scheduler {
    tx: UnboundedSender<FeedMessage>,
    tickers: Vec<JoinHandle<()>>,
    next_id: usize,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<FeedMessage>) -> Self {
        Self {
            tx,
            tickers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, job: Job) -> Result<JobHandle, ScheduleError> {
        if job.interval.is_zero() {
            return Err(ScheduleError::ZeroInterval(job.kind));
        }

        let handle = JobHandle {
            id: self.next_id,
            kind: job.kind,
        };
        self.next_id += 1;

        let Job {
            kind,
            interval,
            fetcher,
        } = job;
        let tx = self.tx.clone();
        let ticker = tokio::spawn(async move {
            let mut ticks = time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                if tx.is_closed() {
                    break;
                }
                tokio::spawn(run_once(kind, fetcher.clone(), tx.clone()));
            }
        });

        tracing::debug!(
            job = ?kind,
            id = handle.id,
            interval_ms = interval.as_millis() as u64,
            "job scheduled"
        );
        self.tickers.push(ticker);
        Ok(handle)
    }

    /// Run a fetcher once, outside any schedule.
    pub fn spawn_once(&self, kind: JobKind, fetcher: impl FeedFetcher + 'static) {
        tokio::spawn(run_once(kind, Arc::new(fetcher), self.tx.clone()));
    }

    /// Stop every scheduled job. Fetches already in flight still report
    /// back.
    pub fn cancel_all(&mut self) {
        if !self.tickers.is_empty() {
            tracing::debug!(count = self.tickers.len(), "cancelling jobs");
        }
        for ticker in self.tickers.drain(..) {
            ticker.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

async fn run_once(kind: JobKind, fetcher: Arc<dyn FeedFetcher>, tx: UnboundedSender<FeedMessage>) {
    if let Some(message) = fetcher.loading_message() {
        let _ = tx.send(FeedMessage {
            job: kind,
            result: Ok(FeedData::Loading(message)),
        });
    }

    let result = fetcher.fetch().await;
    if let Err(ref e) = result {
        tracing::warn!(job = ?kind, error = %e, "fetch failed");
    }

    // The receiver is gone once the board shuts down or reloads.
    let _ = tx.send(FeedMessage { job: kind, result });
}
