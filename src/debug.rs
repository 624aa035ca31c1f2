//! Diagnostics emitted while sequences are materialised.
//!
//! With the `tracing` feature enabled, the points where a sequence is buffered in memory (the materialising terminals,
//! [`Counted::reverse`](crate::Counted::reverse) and the first iteration of a sort) emit events through the
//! [`tracing`](https://docs.rs/tracing) crate. Without it these macros expand to nothing.

/// Emit a `TRACE` event describing a materialisation.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "counted", $($arg)*);
        }
    };
}

/// Emit a `DEBUG` event describing a failed operation.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!(target: "counted", $($arg)*);
        }
    };
}
