//! Structured trace events.
//!
//! With the `tracing` feature enabled these are the `tracing` macros. Without
//! it they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
