/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so traversal hot loops carry no logging
/// cost in default builds.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
