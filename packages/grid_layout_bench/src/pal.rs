//! Platform abstraction layer for the benchmark harness.
//!
//! Timing and console output are the only two ways the harness touches the outside
//! world. Both go through this layer so tests can substitute a fake clock and capture
//! every line the benchmark would have printed.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
