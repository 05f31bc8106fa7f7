//! Real platform implementation backed by the standard monotonic clock and stdout.

use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction.
///
/// Time is reported relative to the moment the platform was created.
#[derive(Clone, Debug)]
pub(crate) struct RealPlatform {
    origin: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    fn emit_line(&self, line: &str) {
        println!("{line}");
    }
}
