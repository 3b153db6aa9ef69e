//! Declared error kinds.
//!
//! An [`ErrorTemplate`] is the immutable half of an error: its kind, the
//! module it was declared in, its message format and how stacks are captured
//! when it is raised. Templates are `const`-constructible and meant to live
//! in `static` items shared by every call site that raises them.

use crate::stack::{module_of, BacktraceCapturer, StackCapturer, MAX_FRAMES, UNKNOWN_MODULE};
use crate::types::error::identity_of;
use crate::types::{format_message, Error};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

/// Symbol prefix of this module, skipped when capturing stacks.
pub(crate) const SYMBOL_PREFIX: &str = concat!(module_path!(), "::");

/// Immutable declaration of an error kind.
///
/// Two errors are the same error when their kind and module match, no matter
/// how their messages were formatted.
///
/// # Examples
///
/// ```
/// use error_trace::{declare, ErrorTemplate};
///
/// static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
/// static ERR_AUDIT: ErrorTemplate = declare!("audit failed", capture = false);
///
/// assert_eq!(ERR_USER_NOT_FOUND.kind(), "user {} not found");
/// assert_eq!(ERR_USER_NOT_FOUND.module(), module_path!());
/// assert!(!ERR_AUDIT.captures_stack());
/// ```
pub struct ErrorTemplate {
    pub(crate) kind: &'static str,
    pub(crate) module: Cow<'static, str>,
    format: &'static str,
    pub(crate) capture_stack: bool,
    max_frames: usize,
    capturer: &'static dyn StackCapturer,
}

impl ErrorTemplate {
    /// Declares a template in `module`, using `format` as both its message
    /// format and its kind.
    ///
    /// Prefer the [`declare!`](crate::declare) macro, which fills `module`
    /// from `module_path!()`.
    #[must_use]
    pub const fn new(format: &'static str, module: &'static str) -> Self {
        Self {
            kind: format,
            module: Cow::Borrowed(module),
            format,
            capture_stack: true,
            max_frames: MAX_FRAMES,
            capturer: &BacktraceCapturer,
        }
    }

    /// Declares a template, deriving its module from the caller's symbol.
    ///
    /// Standard library frames above the caller are skipped. Falls back to
    /// `"unknown"` when the caller cannot be resolved.
    ///
    /// The derivation depends on symbols being available at run time: in a
    /// release build without debuginfo an inlined caller may resolve to a
    /// neighbouring frame or not at all. [`declare!`](crate::declare), which
    /// takes the module from `module_path!()` at compile time, is the
    /// reliable form.
    #[must_use]
    #[inline(never)]
    pub fn declare(format: &'static str) -> Self {
        let mut template = Self::new(format, UNKNOWN_MODULE);
        if let Some(module) = template.capturer.caller_symbol().as_deref().and_then(module_of) {
            template.module = Cow::Owned(module.to_owned());
        }
        template
    }

    /// Overrides the identity key, which otherwise equals the message format.
    #[must_use]
    pub const fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = kind;
        self
    }

    /// Enables or disables stack capture for every raise of this template.
    #[must_use]
    pub const fn capture_stack(mut self, capture: bool) -> Self {
        self.capture_stack = capture;
        self
    }

    /// Bounds the number of frames captured per raise.
    #[must_use]
    pub const fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Replaces the stack source used by [`raise`](Self::raise).
    #[must_use]
    pub const fn with_capturer(mut self, capturer: &'static dyn StackCapturer) -> Self {
        self.capturer = capturer;
        self
    }

    #[inline]
    pub fn kind(&self) -> &str {
        self.kind
    }

    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[inline]
    pub fn format(&self) -> &str {
        self.format
    }

    #[inline]
    pub fn captures_stack(&self) -> bool {
        self.capture_stack
    }

    #[inline]
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    /// Creates a new, independent error from this template.
    ///
    /// The message is formatted with [`format_message`], so mismatched
    /// arguments degrade instead of failing. When capture is enabled the
    /// stack is recorded starting at the caller of `raise`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::{declare, ErrorTemplate};
    ///
    /// static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
    ///
    /// let err = ERR_USER_NOT_FOUND.raise(&[&"Alex"]);
    /// assert_eq!(err.message(), "user Alex not found");
    /// assert!(err.extra_data().is_empty());
    /// assert!(err.direct_cause().is_none());
    /// ```
    #[inline(never)]
    pub fn raise(&self, args: &[&dyn Display]) -> Error {
        let frames =
            if self.capture_stack { self.capturer.capture(self.max_frames) } else { Vec::new() };

        Error::from_template(self, format_message(self.format, args), frames)
    }

    /// Returns true when `candidate` was raised from this template, or is a
    /// template with the same kind and module.
    #[must_use]
    pub fn is(&self, candidate: &(dyn StdError + 'static)) -> bool {
        identity_of(candidate).is_some_and(|(kind, module)| kind == self.kind && module == self.module)
    }
}

impl Debug for ErrorTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorTemplate")
            .field("kind", &self.kind)
            .field("module", &self.module)
            .field("capture_stack", &self.capture_stack)
            .field("max_frames", &self.max_frames)
            .finish_non_exhaustive()
    }
}

impl Display for ErrorTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format)
    }
}

impl StdError for ErrorTemplate {}
