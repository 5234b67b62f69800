//! Click throttling.
//!
//! The engine is timing-agnostic. The front end drops board clicks that
//! arrive too soon after the last accepted one.

use std::time::{Duration, Instant};
use tracing::debug;

/// Admits at most one click per interval.
#[derive(Debug, Clone)]
pub struct ClickGate {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl ClickGate {
    /// Creates a gate that enforces `min_interval` between clicks.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Returns true and records `now` when the click may proceed.
    ///
    /// The interval is measured from the last admitted click; rejected
    /// clicks do not restart it.
    pub fn admit(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.min_interval {
                debug!(?elapsed, min_interval = ?self.min_interval, "Click debounced");
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
