//! Cancelable deferred transition for the sticky-entry animation
//!
//! There is no background task: the host pumps the controller from its own
//! event loop and the timer only answers "is it due yet". Every schedule is
//! stamped with the generation current at the time, and `invalidate` bumps the
//! generation, so a deferral that outlives a reset never fires.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Deferred {
    generation: u64,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct TransitionTimer {
    generation: u64,
    pending: Option<Deferred>,
}

impl TransitionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the transition `delay` after `now`, replacing any pending one
    pub fn schedule(&mut self, delay: Duration, now: Instant) {
        self.pending = Some(Deferred {
            generation: self.generation,
            due: now + delay,
        });
    }

    /// Drop the pending transition, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Cancel and start a new generation
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true exactly once, when the pending transition is due and
    /// still belongs to the current generation
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deferred) if now >= deferred.due => {
                self.pending = None;
                deferred.generation == self.generation
            }
            _ => false,
        }
    }
}
