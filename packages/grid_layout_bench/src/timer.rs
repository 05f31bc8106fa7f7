//! Scope-bound wall-clock timing.

use std::marker::PhantomData;
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};

/// Label used when a timer is created without one.
pub const DEFAULT_TIMER_LABEL: &str = "unnamed_timer";

/// Measures the wall-clock time between its creation and the end of its scope.
///
/// When the timer goes out of scope it prints one line of the form
/// `Elapsed time for <label>:<milliseconds>`, with the elapsed time truncated to whole
/// milliseconds. The report happens on every exit path, including early returns and
/// unwinding panics. Each timer reports exactly once.
///
/// Call [`finish()`](Self::finish) to end the measurement early and obtain the measured
/// duration; the timer does not report again when it is subsequently dropped.
///
/// # Examples
///
/// ```
/// use grid_layout_bench::ScopedTimer;
///
/// {
///     let _timer = ScopedTimer::new("summing");
///     let sum: u64 = (0..1000).sum();
///     std::hint::black_box(sum);
/// } // Prints "Elapsed time for summing:0"
/// ```
///
/// Retrieving the measurement:
///
/// ```
/// use grid_layout_bench::ScopedTimer;
///
/// let timer = ScopedTimer::new("summing");
/// let sum: u64 = (0..1000).sum();
/// std::hint::black_box(sum);
/// let elapsed = timer.finish();
/// println!("took {elapsed:?}");
/// ```
#[derive(Debug)]
#[must_use = "Measurements are taken between creation and drop"]
pub struct ScopedTimer {
    label: String,
    platform: PlatformFacade,
    start: Duration,
    reported: bool,

    _single_threaded: PhantomData<*const ()>,
}

impl ScopedTimer {
    /// Starts a timer with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_platform(label, PlatformFacade::real())
    }

    /// Starts a timer labelled [`DEFAULT_TIMER_LABEL`].
    pub fn unnamed() -> Self {
        Self::new(DEFAULT_TIMER_LABEL)
    }

    pub(crate) fn with_platform(label: impl Into<String>, platform: PlatformFacade) -> Self {
        let start = platform.now();

        Self {
            label: label.into(),
            platform,
            start,
            reported: false,
            _single_threaded: PhantomData,
        }
    }

    /// The label this timer reports under.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time elapsed since the timer was started. Does not report anything.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.platform.now().saturating_sub(self.start)
    }

    /// Stops the timer, reports the elapsed time and returns it.
    pub fn finish(mut self) -> Duration {
        self.report()
    }

    fn report(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.reported = true;
        self.platform
            .emit_line(&format_elapsed_line(&self.label, elapsed));
        elapsed
    }
}

impl Default for ScopedTimer {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.reported {
            self.report();
        }
    }
}

/// Formats the line a timer reports, truncating `elapsed` to whole milliseconds.
#[must_use]
pub fn format_elapsed_line(label: &str, elapsed: Duration) -> String {
    format!("Elapsed time for {label}:{}", elapsed.as_millis())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;
    use crate::pal::FakePlatform;

    fn fake_timer(label: &str) -> (ScopedTimer, FakePlatform) {
        let platform = FakePlatform::new();
        let timer = ScopedTimer::with_platform(label, PlatformFacade::fake(platform.clone()));
        (timer, platform)
    }

    static_assertions::assert_not_impl_any!(ScopedTimer: Send, Sync, Clone, Copy);

    #[test]
    fn default_label_is_unnamed_timer() {
        let timer = ScopedTimer::default();
        assert_eq!(timer.label(), "unnamed_timer");
        let _elapsed = timer.finish();
    }

    #[test]
    fn reports_once_on_drop() {
        let (timer, platform) = fake_timer("write");
        platform.advance(Duration::from_millis(42));

        drop(timer);

        assert_eq!(platform.lines(), vec!["Elapsed time for write:42".to_string()]);
    }

    #[test]
    fn finish_reports_once_and_returns_elapsed() {
        let (timer, platform) = fake_timer("read");
        platform.advance(Duration::from_millis(15));

        let elapsed = timer.finish();

        assert_eq!(elapsed, Duration::from_millis(15));
        assert_eq!(platform.lines(), vec!["Elapsed time for read:15".to_string()]);
    }

    #[test]
    fn truncates_to_whole_milliseconds() {
        let (timer, platform) = fake_timer("truncated");
        platform.advance(Duration::from_micros(1_999_999));

        drop(timer);

        assert_eq!(
            platform.lines(),
            vec!["Elapsed time for truncated:1999".to_string()]
        );
    }

    #[test]
    fn immediately_dropped_timer_reports_zero() {
        let (timer, platform) = fake_timer("instant");

        drop(timer);

        assert_eq!(platform.lines(), vec!["Elapsed time for instant:0".to_string()]);
    }

    #[test]
    fn elapsed_does_not_report() {
        let (timer, platform) = fake_timer("peek");
        platform.advance(Duration::from_millis(3));

        assert_eq!(timer.elapsed(), Duration::from_millis(3));
        assert!(platform.lines().is_empty());

        drop(timer);
        assert_eq!(platform.lines().len(), 1);
    }

    #[test]
    fn reports_on_early_return() {
        fn measured(platform: &FakePlatform, bail: bool) -> u32 {
            let _timer = ScopedTimer::with_platform("early", PlatformFacade::fake(platform.clone()));
            platform.advance(Duration::from_millis(4));

            if bail {
                return 0;
            }

            platform.advance(Duration::from_millis(4));
            1
        }

        let platform = FakePlatform::new();
        assert_eq!(measured(&platform, true), 0);

        assert_eq!(platform.lines(), vec!["Elapsed time for early:4".to_string()]);
    }

    #[test]
    fn reports_when_scope_panics() {
        let platform = FakePlatform::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _timer =
                ScopedTimer::with_platform("panicking", PlatformFacade::fake(platform.clone()));
            platform.advance(Duration::from_millis(9));
            panic!("simulated failure inside the measured scope");
        }));

        assert!(result.is_err());
        assert_eq!(
            platform.lines(),
            vec!["Elapsed time for panicking:9".to_string()]
        );
    }

    #[test]
    fn format_matches_protocol() {
        assert_eq!(
            format_elapsed_line("Write nested Vec", Duration::from_millis(1234)),
            "Elapsed time for Write nested Vec:1234"
        );
    }
}
