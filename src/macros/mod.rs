//! Ergonomic macros for declaring and raising errors.
//!
//! - [`macro@crate::declare`] - Declares an [`ErrorTemplate`](crate::ErrorTemplate)
//!   in a `const` context, taking its module from `module_path!()`.
//! - [`macro@crate::raise`] - Raises a template with variadic message arguments.
//! - [`macro@crate::extra`] - Builds extra entries with mixed value types.
//!
//! # Examples
//!
//! ```
//! use error_trace::{declare, extra, raise, ErrorTemplate};
//!
//! static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
//!
//! let err = raise!(ERR_USER_NOT_FOUND, "Alex").extra(extra! {
//!     "userID" => 310700,
//!     "accountID" => "ARN3107",
//! });
//!
//! assert_eq!(err.to_string(), "user Alex not found");
//! assert_eq!(err.extra_data()["accountID"], "ARN3107");
//! ```

/// Declares an [`ErrorTemplate`](crate::ErrorTemplate) in the current module.
///
/// The message format doubles as the template's kind. Stack capture is on
/// unless `capture = false` is given.
///
/// # Examples
///
/// ```
/// use error_trace::{declare, ErrorTemplate};
///
/// static ERR_NOT_FOUND: ErrorTemplate = declare!("{} not found");
/// static ERR_RETRYABLE: ErrorTemplate = declare!("try again later", capture = false);
///
/// assert!(ERR_NOT_FOUND.captures_stack());
/// assert!(!ERR_RETRYABLE.captures_stack());
/// ```
#[macro_export]
macro_rules! declare {
    ($format:literal $(,)?) => {
        $crate::ErrorTemplate::new($format, ::core::module_path!())
    };
    ($format:literal, capture = $capture:expr $(,)?) => {
        $crate::ErrorTemplate::new($format, ::core::module_path!()).capture_stack($capture)
    };
}

/// Raises a template, accepting any `Display` values as message arguments.
///
/// # Examples
///
/// ```
/// use error_trace::{declare, raise, ErrorTemplate};
///
/// static ERR_TRANSFER: ErrorTemplate = declare!("cannot transfer {} to {}", capture = false);
///
/// let err = raise!(ERR_TRANSFER, 120, "ARN3107");
/// assert_eq!(err.message(), "cannot transfer 120 to ARN3107");
/// ```
#[macro_export]
macro_rules! raise {
    ($template:expr $(,)?) => {
        $template.raise(&[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $template.raise(&[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}

/// Builds `(key, value)` extra entries whose values may differ in type.
///
/// Values go through `serde_json::json!`, so anything serializable works.
#[macro_export]
macro_rules! extra {
    ($($key:expr => $value:expr),* $(,)?) => {
        [$(($key, $crate::__private::json!($value))),*]
    };
}
