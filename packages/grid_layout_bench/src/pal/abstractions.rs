//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides a monotonic clock and a line-oriented output channel.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current monotonic time, measured from an arbitrary fixed origin.
    ///
    /// Only differences between two values obtained from the same platform are meaningful.
    fn now(&self) -> Duration;

    /// Writes one line of benchmark output. The line terminator is added by the platform.
    fn emit_line(&self, line: &str);
}
