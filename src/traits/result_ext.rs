//! Extension traits for raising errors from `Result` types.
//!
//! This module provides [`ResultExt`], which turns the error side of any
//! `Result` into the cause of a freshly raised [`Error`] without verbose
//! `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_trace::traits::ResultExt;
//! use error_trace::{declare, ErrorTemplate};
//!
//! static ERR_READ: ErrorTemplate = declare!("cannot read {}");
//!
//! fn load(path: &str) -> error_trace::Result<String> {
//!     std::fs::read_to_string(path).or_raise(|| ERR_READ.raise(&[&path]))
//! }
//!
//! let err = load("data.txt").unwrap_err();
//! assert!(err.to_string().starts_with("cannot read data.txt: "));
//! ```

use crate::types::{Error, ErrorTemplate};
use std::error::Error as StdError;

/// Extension trait for raising errors from `Result` types ergonomically.
pub trait ResultExt<T, E> {
    /// Raises the error built by `raise`, with the `Err` value as its cause.
    ///
    /// The closure is only called if the `Result` is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::traits::ResultExt;
    /// use error_trace::{declare, ErrorTemplate};
    ///
    /// static ERR_PARSE: ErrorTemplate = declare!("invalid port {}");
    ///
    /// let raw = "80a";
    /// let err = raw.parse::<u16>().or_raise(|| ERR_PARSE.raise(&[&raw])).unwrap_err();
    /// assert!(err.to_string().starts_with("invalid port 80a: "));
    /// ```
    fn or_raise<F>(self, raise: F) -> Result<T, Error>
    where
        F: FnOnce() -> Error;

    /// Raises `template` without message arguments, with the `Err` value as
    /// its cause. The stack starts at the caller of `raise_as`.
    fn raise_as(self, template: &ErrorTemplate) -> Result<T, Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn or_raise<F>(self, raise: F) -> Result<T, Error>
    where
        F: FnOnce() -> Error,
    {
        self.map_err(|e| raise().cause(e))
    }

    #[inline(never)]
    fn raise_as(self, template: &ErrorTemplate) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(template.raise(&[]).skip(1).cause(e)),
        }
    }
}

/// Extension trait for raising errors from results carrying boxed `dyn Error`s.
///
/// # Examples
///
/// ```
/// use error_trace::traits::BoxedResultExt;
/// use error_trace::{declare, ErrorTemplate};
///
/// static ERR_PLUGIN: ErrorTemplate = declare!("plugin failed");
///
/// let result: Result<(), Box<dyn std::error::Error + Send + Sync>> = Err("boom".into());
/// let err = result.or_raise(|| ERR_PLUGIN.raise(&[])).unwrap_err();
/// assert_eq!(err.to_string(), "plugin failed: boom");
/// ```
pub trait BoxedResultExt<T> {
    /// Raises the error built by `raise`, with the boxed error as its cause.
    fn or_raise<F>(self, raise: F) -> Result<T, Error>
    where
        F: FnOnce() -> Error;
}

impl<T> BoxedResultExt<T> for Result<T, Box<dyn StdError + Send + Sync + 'static>> {
    #[inline]
    fn or_raise<F>(self, raise: F) -> Result<T, Error>
    where
        F: FnOnce() -> Error,
    {
        self.map_err(|e| raise().cause_boxed(e))
    }
}
