//! Metrics panel lifecycle.
//!
//! A panel fetches once when mounted and settles at most once:
//!
//! ```text
//!          fetch ok
//!   Empty ──────────▶ Loaded(records)
//!     │
//!     └─────────────▶ Failed(reason)
//!          fetch err
//! ```
//!
//! The fetch runs as a task on a tokio runtime and reports back through a
//! oneshot channel. Nothing else ever triggers a fetch. Unmounting aborts
//! the task and drops the receiving end, so a late completion is discarded
//! instead of touching a panel that is gone.

use minidash_client::error::FetchError;
use minidash_client::source::MetricsSource;
use minidash_common::types::{MetricRecord, MetricsCollection};
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

type FetchOutcome = Result<MetricsCollection, FetchError>;

/// What the panel currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    /// Mounted, fetch not yet resolved.
    Empty,
    /// The fetch resolved with this collection.
    Loaded(MetricsCollection),
    /// The fetch failed for this reason.
    Failed(String),
}

impl PanelState {
    /// Records to display. Empty unless the panel is `Loaded`.
    #[must_use]
    pub fn records(&self) -> &[MetricRecord] {
        match self {
            Self::Loaded(metrics) => metrics.as_slice(),
            Self::Empty | Self::Failed(_) => &[],
        }
    }

    /// Short description for status lines.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Empty => "loading…".to_string(),
            Self::Loaded(metrics) if metrics.len() == 1 => "1 record".to_string(),
            Self::Loaded(metrics) => format!("{} records", metrics.len()),
            Self::Failed(reason) => format!("error: {reason}"),
        }
    }
}

struct InFlight {
    receiver: oneshot::Receiver<FetchOutcome>,
    task: JoinHandle<()>,
}

/// A mounted metrics panel.
pub struct Panel {
    endpoint: String,
    state: PanelState,
    in_flight: Option<InFlight>,
}

impl Panel {
    /// Mounts a panel and starts its single fetch on `runtime`.
    pub fn mount<S>(runtime: &Handle, source: S) -> Self
    where
        S: MetricsSource + 'static,
    {
        let endpoint = source.endpoint().to_string();
        let (sender, receiver) = oneshot::channel();

        let task = runtime.spawn(async move {
            let outcome = source.fetch().await;
            if sender.send(outcome).is_err() {
                tracing::debug!("panel unmounted before fetch completed, discarding result");
            }
        });

        tracing::info!(endpoint = %endpoint, "metrics panel mounted");
        Self {
            endpoint,
            state: PanelState::Empty,
            in_flight: Some(InFlight { receiver, task }),
        }
    }

    /// Location the panel fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// Records to display.
    #[must_use]
    pub fn records(&self) -> &[MetricRecord] {
        self.state.records()
    }

    /// Returns `true` while the fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Checks for a fetch result without blocking.
    ///
    /// Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };
        let outcome = match in_flight.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => None,
        };
        self.in_flight = None;
        self.settle(outcome)
    }

    /// Waits for the fetch to resolve. Returns immediately once settled.
    pub async fn wait(&mut self) {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return;
        };
        let outcome = (&mut in_flight.receiver).await.ok();
        self.in_flight = None;
        let _ = self.settle(outcome);
    }

    /// Tears the panel's fetch down. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
            tracing::debug!(endpoint = %self.endpoint, "aborted in-flight metrics fetch");
        }
    }

    fn settle(&mut self, outcome: Option<FetchOutcome>) -> bool {
        if self.state != PanelState::Empty {
            tracing::debug!(endpoint = %self.endpoint, "panel already settled, ignoring completion");
            return false;
        }
        self.state = match outcome {
            Some(Ok(metrics)) => {
                tracing::debug!(records = metrics.len(), "metrics panel loaded");
                PanelState::Loaded(metrics)
            }
            Some(Err(err)) => {
                if err.is_transport() {
                    tracing::warn!(endpoint = %self.endpoint, error = %err, "metrics endpoint unreachable");
                } else {
                    tracing::warn!(endpoint = %self.endpoint, error = %err, "metrics payload rejected");
                }
                PanelState::Failed(err.to_string())
            }
            None => {
                tracing::warn!(endpoint = %self.endpoint, "metrics fetch ended without a result");
                PanelState::Failed("fetch task ended without a result".to_string())
            }
        };
        true
    }

    #[cfg(test)]
    pub(crate) fn settled(endpoint: &str, state: PanelState) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            state,
            in_flight: None,
        }
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("endpoint", &self.endpoint)
            .field("state", &self.state)
            .field("loading", &self.is_loading())
            .finish()
    }
}
