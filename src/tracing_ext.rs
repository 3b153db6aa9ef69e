//! Tracing integration for error-trace.
//!
//! Emits raised errors as `tracing` events so they reach whatever subscriber
//! the application installed.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.1", features = ["tracing"] }
//! ```

use crate::types::Error;

/// Extension trait that records an error as a `tracing` event.
pub trait TracingExt {
    /// Emits one `ERROR` event with the error's kind, module, flattened
    /// message and plain full report.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_trace::tracing_ext::TracingExt;
    ///
    /// if let Err(err) = deposit(&account) {
    ///     err.trace_error();
    /// }
    /// ```
    fn trace_error(&self) -> &Self;
}

impl TracingExt for Error {
    fn trace_error(&self) -> &Self {
        tracing::error!(
            kind = self.kind(),
            module = self.module(),
            tags = ?self.tag_map(),
            report = %self.report().plain(),
            "{}",
            self
        );
        self
    }
}

/// Extension trait for `Result`s that records the error side as it passes.
pub trait ResultTraceExt<T> {
    /// Emits the error through [`TracingExt::trace_error`] and returns `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T> ResultTraceExt<T> for Result<T, Error> {
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            err.trace_error();
        }
        self
    }
}
