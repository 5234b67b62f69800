//! Delayed sound cues.
//!
//! The celebration sound trails the winner popup slightly. Cues wait here
//! until the event loop's next tick past their deadline.

use crate::audio::SoundCue;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Pending {
    at: Instant,
    cue: SoundCue,
}

/// Holds cues until they are due.
#[derive(Debug, Clone, Default)]
pub struct CueScheduler {
    pending: Vec<Pending>,
}

impl CueScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `cue` to play at `at`.
    pub fn schedule(&mut self, cue: SoundCue, at: Instant) {
        self.pending.push(Pending { at, cue });
    }

    /// Removes and returns the cues due at `now`, in scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<SoundCue> {
        let (due, later): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|pending| pending.at <= now);
        self.pending = later;
        due.into_iter().map(|pending| pending.cue).collect()
    }

    /// Drops everything queued.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Returns true when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
