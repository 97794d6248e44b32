//! Cooldown lock for step transitions.
//!
//! A single trackpad tick can deliver dozens of wheel events in under a
//! second; the guard absorbs them by rejecting step transitions for a
//! fixed window after each accepted one. This is a debounce, not a
//! mutex: direct jumps bypass it entirely, and it clears itself by
//! expiry rather than through a timer callback.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TransitionGuard {
    cooldown: Duration,
    engaged_at: Option<Instant>,
}

impl TransitionGuard {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            engaged_at: None,
        }
    }

    /// Whether a step transition engaged within the cooldown window.
    pub fn is_locked(&self, now: Instant) -> bool {
        match self.engaged_at {
            Some(at) => now.duration_since(at) < self.cooldown,
            None => false,
        }
    }

    /// Start a new cooldown window. Called only for accepted steps.
    pub fn engage(&mut self, now: Instant) {
        self.engaged_at = Some(now);
    }
}
