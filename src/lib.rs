//! Declared error kinds with tracebacks, cause chains and structured reports.
//!
//! An [`ErrorTemplate`] is declared once, usually in a `static`, and raised any
//! number of times. Every raise produces an independent [`Error`] carrying a
//! formatted message, a captured stack, and whatever context the raising call
//! site attaches before returning it.
//!
//! # Examples
//!
//! ## Declaring and Raising
//!
//! ```
//! use error_trace::{declare, raise, ErrorTemplate};
//!
//! static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
//!
//! let err = raise!(ERR_USER_NOT_FOUND, "Alex").extra([("userID", 310700)]);
//!
//! assert_eq!(err.to_string(), "user Alex not found");
//! assert!(ERR_USER_NOT_FOUND.is(&err));
//! assert!(err.is(&raise!(ERR_USER_NOT_FOUND, "Bob")));
//! ```
//!
//! ## Wrapping Causes
//!
//! ```
//! use error_trace::{declare, ErrorTemplate};
//! use std::io;
//!
//! static ERR_CANNOT_DEPOSIT: ErrorTemplate = declare!("cannot deposit");
//!
//! let library_error = io::Error::other("other library error");
//! let err = ERR_CANNOT_DEPOSIT
//!     .raise(&[])
//!     .with("cannot add money to account {}", &[&"ARN3107"])
//!     .cause(library_error);
//!
//! assert_eq!(
//!     err.to_string(),
//!     "cannot deposit: cannot add money to account ARN3107: other library error"
//! );
//! assert!(err.has(&io::Error::other("other library error")));
//! ```
//!
//! ## Reporting
//!
//! ```
//! use error_trace::{declare, ErrorTemplate, Level};
//!
//! static ERR_TIMEOUT: ErrorTemplate = declare!("request timed out", capture = false);
//!
//! let err = ERR_TIMEOUT.raise(&[]).tag("service", "billing");
//!
//! let report = err.report().plain().to_string();
//! assert!(report.contains("(Stack trace not available)"));
//!
//! let event = err.sentry_report();
//! assert_eq!(event.level, Level::Error);
//! assert_eq!(event.tags["service"], "billing");
//! assert_eq!(event.exceptions.len(), 1);
//! ```

/// Error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Stack capture behind the `StackCapturer` seam
pub mod stack;
/// Extension traits for `Result`
pub mod traits;
/// Templates, errors, reports and events
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use serde_json::Value;
pub use stack::{BacktraceCapturer, StackCapturer, MAX_FRAMES};
pub use traits::*;
pub use types::{
    event::{Event, EventFrame, EventSink, Exception, Level, Stacktrace},
    report::{strip_ansi, Palette, ReportBuilder, ReportConfig},
    Chain, Error, ErrorTemplate, FingerprintConfig, ForeignError, Frame, Node, Result,
};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
