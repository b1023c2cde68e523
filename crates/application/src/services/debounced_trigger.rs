//! Debounced estimation trigger
//!
//! Coalesces rapid location edits into a single estimator invocation that
//! fires once input has been quiet for a fixed period. Rescheduling cancels
//! the pending (not yet fired) invocation; an invocation whose quiet period
//! has elapsed runs to completion. Dropping the trigger cancels whatever is
//! still pending.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::RouteResult;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use super::RouteEstimator;

/// Quiet period used by the booking form
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Result of one fired estimation, tagged with the inputs it was computed for
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationEvent {
    /// Start text the estimation ran with
    pub start: String,
    /// End text the estimation ran with
    pub end: String,
    /// Estimation outcome
    pub result: RouteResult,
}

/// Schedules deferred estimator invocations, keeping at most one pending
pub struct DebouncedTrigger {
    estimator: Arc<RouteEstimator>,
    quiet_period: Duration,
    pending: Mutex<Option<oneshot::Sender<()>>>,
    events: mpsc::UnboundedSender<EstimationEvent>,
}

impl fmt::Debug for DebouncedTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedTrigger")
            .field("quiet_period", &self.quiet_period)
            .field("has_pending", &self.has_pending())
            .finish_non_exhaustive()
    }
}

impl DebouncedTrigger {
    /// Create a trigger and the receiver its results are delivered on
    pub fn new(
        estimator: Arc<RouteEstimator>,
        quiet_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<EstimationEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let trigger = Self {
            estimator,
            quiet_period,
            pending: Mutex::new(None),
            events,
        };
        (trigger, receiver)
    }

    /// The configured quiet period
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// (Re)schedule an estimation for the given texts
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, start: impl Into<String>, end: impl Into<String>) {
        let start = start.into();
        let end = end.into();
        let (cancel_tx, cancel_rx) = oneshot::channel();

        if let Some(previous) = self.pending.lock().replace(cancel_tx) {
            // Err means the previous invocation already fired
            if previous.send(()).is_ok() {
                trace!("Superseded pending estimation");
            }
        }

        let estimator = Arc::clone(&self.estimator);
        let events = self.events.clone();
        let quiet_period = self.quiet_period;

        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(quiet_period) => {},
                _ = cancel_rx => return,
            }

            debug!(%start, %end, "Quiet period elapsed, estimating route");
            let result = estimator.estimate(&start, &end).await;

            if events.send(EstimationEvent { start, end, result }).is_err() {
                debug!("Estimation receiver dropped, discarding result");
            }
        });
    }

    /// Cancel the pending invocation, if any
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            if pending.send(()).is_ok() {
                debug!("Cancelled pending estimation");
            }
        }
    }

    /// Check if an invocation is scheduled but has not fired yet
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|pending| !pending.is_closed())
    }
}

impl Drop for DebouncedTrigger {
    fn drop(&mut self) {
        self.cancel();
    }
}
