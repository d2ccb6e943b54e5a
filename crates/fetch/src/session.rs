//! The incremental fetch session.
//!
//! A session walks the remote collection in fixed-size pages, starting at
//! index 1 and advancing both bounds by the step after each successful page,
//! until the reported total is covered. Every page is emitted on the update
//! channel as soon as it arrives so callers can render progressively instead
//! of waiting for the full set.
//!
//! Cancellation is cooperative: the flag is checked once per page boundary,
//! an in-flight request is never aborted. Each session ends with exactly one
//! terminal update (`Completed`, `Cancelled` or `Failed`); a failure ends
//! the session on the spot, there is no retry or backoff.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use model::{Page, PageBounds};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::protocol::ToiletRecord;
use crate::source::PageSource;

/// Tunables for one fetch session.
#[derive(Debug, Copy, Clone)]
pub struct FetchConfig {
    /// Maximum records per page request. The upstream service caps slices
    /// at 1000 rows.
    pub step: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { step: 1000 }
    }
}

/// Progress and terminal updates emitted by a session.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchUpdate {
    /// One fetched slice, emitted as soon as it arrives.
    Page(Page<ToiletRecord>),
    /// The reported total was covered.
    Completed { total_fetched: usize },
    /// The cancel flag was observed at a page boundary.
    Cancelled { total_fetched: usize },
    /// A page request or parse failed; the session is over.
    Failed { message: String },
}

/// Shared cooperative cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Runs one fetch session to its terminal update.
///
/// Returns the accumulated result set: every record from every page that was
/// emitted, in arrival order. The total count is re-read from each response,
/// matching the upstream service's live-dataset behavior.
pub async fn run_session(
    source: &dyn PageSource,
    config: FetchConfig,
    cancel: &CancelFlag,
    updates: &mpsc::UnboundedSender<FetchUpdate>,
) -> Vec<ToiletRecord> {
    let step = config.step;
    let mut bounds = PageBounds::first(step);
    let mut total = 0u32;
    let mut merged: Vec<ToiletRecord> = Vec::new();

    loop {
        if cancel.is_cancelled() {
            debug!(fetched = merged.len(), "fetch session cancelled");
            let _ = updates.send(FetchUpdate::Cancelled {
                total_fetched: merged.len(),
            });
            return merged;
        }

        // The first request always covers [1, step]; the total is only
        // known once a response has arrived.
        if total != 0 {
            bounds = bounds.next(step);
        }

        let page = match source.fetch_page(bounds).await {
            Ok(page) => page,
            Err(e) => {
                warn!(start = bounds.start, last = bounds.last, "page fetch failed: {e}");
                let _ = updates.send(FetchUpdate::Failed {
                    message: e.to_string(),
                });
                return merged;
            }
        };

        total = page.total_count;
        merged.extend(page.records.iter().cloned());
        debug!(
            start = bounds.start,
            last = bounds.last,
            rows = page.len(),
            total,
            "page fetched"
        );

        let done = page.is_final();
        let _ = updates.send(FetchUpdate::Page(page));
        if done {
            break;
        }
    }

    info!(total_fetched = merged.len(), "fetch session complete");
    let _ = updates.send(FetchUpdate::Completed {
        total_fetched: merged.len(),
    });
    merged
}

/// Handle to a spawned session. Dropping it detaches the task; the session
/// still winds down on its own once the flag is observed.
#[derive(Debug)]
pub struct SessionHandle {
    cancel: CancelFlag,
}

impl SessionHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

/// Owns at most one running session.
///
/// Starting a new session cancels and discards any in-flight one, so a
/// consumer never receives pages from two sessions at once on a fresh
/// channel.
#[derive(Debug, Default)]
pub struct SessionController {
    current: Option<SessionHandle>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a session on the current runtime, cancelling any previous one.
    /// Returns the update channel for the new session.
    pub fn start(
        &mut self,
        source: Arc<dyn PageSource>,
        config: FetchConfig,
    ) -> mpsc::UnboundedReceiver<FetchUpdate> {
        self.stop();

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancelFlag::new();
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            run_session(source.as_ref(), config, &task_cancel, &tx).await;
        });

        self.current = Some(SessionHandle { cancel });
        rx
    }

    /// Cancels and discards the in-flight session, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }
}
