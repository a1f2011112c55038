//! Debounced commit trigger for free-text fields.
//!
//! Timers are deadlines polled by the caller's event loop; nothing here sleeps.
//! Every scheduled timer gets a fresh [`TimerId`], so firing a cancelled timer is a
//! no-op even when the field holds the same value as before.

use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
struct Timer {
    id: TimerId,
    deadline: Instant,
}

#[derive(Clone, Debug)]
pub struct CommitTrigger<T> {
    quiet: Duration,
    current: T,
    // Value at the start of the pending window; `None` once committed.
    previous: Option<T>,
    timer: Option<Timer>,
    generation: u64,
}

impl<T: Clone + PartialEq> CommitTrigger<T> {
    pub fn new(initial: T) -> Self {
        Self::with_quiet_period(initial, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(initial: T, quiet: Duration) -> Self {
        Self {
            quiet,
            current: initial,
            previous: None,
            timer: None,
            generation: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Replaces the tracked value without committing (e.g. a different entity was selected).
    pub fn reset(&mut self, value: T) {
        self.timer = None;
        self.previous = None;
        self.current = value;
    }

    /// Captures the pre-edit value as the commit baseline.
    pub fn focus(&mut self) {
        self.previous = Some(self.current.clone());
    }

    /// Records a new field value, restarting the quiet period.
    ///
    /// Returns the id of the newly scheduled timer, or `None` when the value did not change.
    pub fn change(&mut self, value: T, now: Instant) -> Option<TimerId> {
        if value == self.current {
            return None;
        }
        if self.previous.is_none() {
            self.previous = Some(self.current.clone());
        }
        self.cancel();
        self.current = value;

        self.generation += 1;
        let id = TimerId(self.generation);
        self.timer = Some(Timer {
            id,
            deadline: now + self.quiet,
        });
        tracing::trace!(timer = self.generation, "debounce timer scheduled");
        Some(id)
    }

    pub fn cancel(&mut self) -> Option<TimerId> {
        self.timer.take().map(|t| t.id)
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.timer.map(|t| t.id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }

    /// Fires the pending timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant, is_valid: impl FnOnce(&T) -> bool) -> Option<T> {
        let timer = self.timer?;
        if now < timer.deadline {
            return None;
        }
        self.fire(timer.id, is_valid)
    }

    /// Fires a specific timer. Stale or cancelled ids never commit.
    pub fn fire(&mut self, id: TimerId, is_valid: impl FnOnce(&T) -> bool) -> Option<T> {
        match self.timer {
            Some(t) if t.id == id => {}
            _ => return None,
        }
        self.timer = None;
        self.evaluate(is_valid)
    }

    /// Evaluates the commit condition immediately, dropping any pending timer.
    pub fn blur(&mut self, is_valid: impl FnOnce(&T) -> bool) -> Option<T> {
        self.cancel();
        self.evaluate(is_valid)
    }

    fn evaluate(&mut self, is_valid: impl FnOnce(&T) -> bool) -> Option<T> {
        let previous = self.previous.as_ref()?;
        if !is_valid(&self.current) {
            tracing::debug!("commit withheld: field is invalid");
            return None;
        }
        if previous == &self.current {
            return None;
        }
        self.previous = None;
        Some(self.current.clone())
    }
}

#[cfg(test)]
#[path = "tests/debounce_tests.rs"]
mod tests;
