//! Extension traits for raising errors from `Result` values.
//!
//! - [`ResultExt`]: wraps any standard error as the cause of a raised [`Error`](crate::Error)
//! - [`BoxedResultExt`]: the same for already boxed `dyn Error` values
//!
//! # Examples
//!
//! ```
//! use error_trace::traits::ResultExt;
//! use error_trace::{declare, ErrorTemplate};
//!
//! static ERR_LOAD_CONFIG: ErrorTemplate = declare!("cannot load config");
//!
//! let result = std::fs::read_to_string("missing.toml").raise_as(&ERR_LOAD_CONFIG);
//! assert!(ERR_LOAD_CONFIG.is(&result.unwrap_err()));
//! ```

pub mod result_ext;

pub use result_ext::{BoxedResultExt, ResultExt};
