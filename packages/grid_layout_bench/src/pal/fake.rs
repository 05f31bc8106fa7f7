//! Scripted clock and captured output for unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

const ERR_POISONED: &str = "a test panicked while holding the fake clock lock";

/// Clock and output buffer, shared by every clone of a [`FakePlatform`].
#[derive(Debug, Default)]
struct FakePlatformState {
    now: Duration,

    /// Added to `now` after every read of the clock.
    tick: Duration,

    lines: Vec<String>,
}

/// A clock that only moves when told to, plus an in-memory stdout.
///
/// Clones share the same clock and output buffer, so a test can keep one clone to
/// advance time and inspect output while the code under test owns another.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Clock at zero, nothing printed yet.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the current clock value.
    pub(crate) fn set_now(&self, now: Duration) {
        self.state.lock().expect(ERR_POISONED).now = now;
    }

    /// Moves the clock forward by `delta`.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut state = self.state.lock().expect(ERR_POISONED);
        state.now = state
            .now
            .checked_add(delta)
            .expect("fake clock overflow indicates a broken test");
    }

    /// Makes every clock read advance the clock by `tick` afterwards.
    pub(crate) fn set_tick(&self, tick: Duration) {
        self.state.lock().expect(ERR_POISONED).tick = tick;
    }

    /// Returns every line emitted so far.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.state.lock().expect(ERR_POISONED).lines.clone()
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Duration {
        let mut state = self.state.lock().expect(ERR_POISONED);
        let now = state.now;
        state.now = now
            .checked_add(state.tick)
            .expect("fake clock overflow indicates a broken test");
        now
    }

    fn emit_line(&self, line: &str) {
        self.state
            .lock()
            .expect(ERR_POISONED)
            .lines
            .push(line.to_string());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time_and_no_output() {
        let platform = FakePlatform::new();
        assert_eq!(platform.now(), Duration::ZERO);
        assert!(platform.lines().is_empty());
    }

    #[test]
    fn advance_accumulates() {
        let platform = FakePlatform::new();
        platform.advance(Duration::from_millis(5));
        platform.advance(Duration::from_millis(7));

        assert_eq!(platform.now(), Duration::from_millis(12));
    }

    #[test]
    fn tick_applies_after_each_read() {
        let platform = FakePlatform::new();
        platform.set_tick(Duration::from_millis(10));

        assert_eq!(platform.now(), Duration::ZERO);
        assert_eq!(platform.now(), Duration::from_millis(10));
        assert_eq!(platform.now(), Duration::from_millis(20));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_now(Duration::from_millis(100));
        assert_eq!(platform2.now(), Duration::from_millis(100));

        platform2.emit_line("from clone");
        assert_eq!(platform1.lines(), vec!["from clone".to_string()]);
    }
}
