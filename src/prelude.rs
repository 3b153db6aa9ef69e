//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trace::prelude::*;
//!
//! static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
//!
//! fn find_user(name: &str) -> Result<u64> {
//!     Err(raise!(ERR_USER_NOT_FOUND, name).extra([("retries", 0)]))
//! }
//!
//! let err = find_user("Alex").unwrap_err();
//! assert!(ERR_USER_NOT_FOUND.is(&err));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`declare!`], [`raise!`], [`extra!`]
//! - **Types**: [`Error`], [`ErrorTemplate`], [`Event`], [`Result`]
//! - **Traits**: [`ResultExt`], [`BoxedResultExt`], [`EventSink`]

// Macros
pub use crate::{declare, extra, raise};

// Core types
pub use crate::types::event::{Event, EventSink};
pub use crate::types::{Error, ErrorTemplate, Result};

// Traits
pub use crate::traits::{BoxedResultExt, ResultExt};
