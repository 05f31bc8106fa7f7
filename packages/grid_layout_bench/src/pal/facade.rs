//! Dispatch between the system clock and the scripted test clock.

use std::time::Duration;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Either the real clock and stdout, or (in tests) a scripted clock with captured output.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    /// Monotonic system clock, lines go to stdout.
    Real(RealPlatform),

    /// Scripted clock, lines are kept in memory.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Times against the system clock and prints to stdout.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform::new())
    }

    /// Routes everything through `fake_platform`.
    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now(),
        }
    }

    fn emit_line(&self, line: &str) {
        match self {
            Self::Real(platform) => platform.emit_line(line),
            #[cfg(test)]
            Self::Fake(platform) => platform.emit_line(line),
        }
    }
}
