// Quiet-period timer for automatic suggestion requests

use crate::config::DEFAULT_SUGGESTION_DEBOUNCE;
use std::time::{Duration, Instant};

/// Fires once after `delay` has passed since the most recent [`Debouncer::touch`].
///
/// Every touch restarts the wait; after firing the debouncer stays quiet until
/// it is touched again.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_change: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEFAULT_SUGGESTION_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            last_change: None,
        }
    }

    /// Record a change at `now`
    pub fn touch(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    /// Forget a pending change
    pub fn cancel(&mut self) {
        self.last_change = None;
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// `true` exactly once per quiet period that has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(changed) if now.saturating_duration_since(changed) >= self.delay => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }
}
