//! Call-stack capture.
//!
//! Templates never walk the stack themselves; they ask a [`StackCapturer`].
//! [`BacktraceCapturer`] is the default and resolves frames through the
//! `backtrace` crate. Any other implementation (a fixed stack for tests, a
//! capturer that always returns nothing) can be plugged into a template with
//! [`ErrorTemplate::with_capturer`](crate::ErrorTemplate::with_capturer).
//!
//! # Examples
//!
//! ```
//! use error_trace::stack::module_of;
//!
//! assert_eq!(module_of("app::repo::find_user"), Some("app::repo"));
//! assert_eq!(module_of("app::repo::find_user::{{closure}}"), Some("app::repo"));
//! assert_eq!(module_of("main"), None);
//! ```

use crate::types::Frame;

/// Default bound on the number of frames captured per raise.
pub const MAX_FRAMES: usize = 100;

/// Module name used when the caller cannot be resolved.
pub const UNKNOWN_MODULE: &str = "unknown";

/// Symbol prefixes of the capture machinery, skipped at the top of every stack.
const INTERNAL_PREFIXES: [&str; 3] = [
    "backtrace::",
    concat!(module_path!(), "::"),
    crate::types::template::SYMBOL_PREFIX,
];

/// Frames inspected when looking for the caller of a runtime declaration.
const CALLER_LOOKAHEAD: usize = 8;

/// Crates whose frames stand between a caller and an inlined callee.
const STD_PREFIXES: [&str; 3] = ["core::", "std::", "alloc::"];

/// Source of call-stack snapshots.
///
/// Frames are returned innermost first: index 0 is the immediate caller of
/// the capture point.
pub trait StackCapturer: Send + Sync {
    /// Captures at most `max_frames` frames above the capture machinery.
    fn capture(&self, max_frames: usize) -> Vec<Frame>;

    /// Returns the fully qualified symbol of the first frame above the
    /// capture machinery, skipping standard library call shims.
    fn caller_symbol(&self) -> Option<String> {
        self.capture(CALLER_LOOKAHEAD)
            .into_iter()
            .map(|frame| frame.function)
            .find(|function| !is_std_shim(function))
    }
}

/// [`StackCapturer`] backed by [`backtrace::trace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktraceCapturer;

impl StackCapturer for BacktraceCapturer {
    #[inline(never)]
    fn capture(&self, max_frames: usize) -> Vec<Frame> {
        let mut frames = Vec::new();
        if max_frames == 0 {
            return frames;
        }

        let mut leading = true;
        backtrace::trace(|raw| {
            backtrace::resolve_frame(raw, |symbol| {
                let function = symbol.name().map(|name| format!("{name:#}"));
                if leading && function.as_deref().map_or(true, is_internal) {
                    return;
                }
                leading = false;

                if frames.len() < max_frames {
                    frames.push(Frame {
                        file: symbol
                            .filename()
                            .map(|path| path.display().to_string())
                            .unwrap_or_default(),
                        line: symbol.lineno().unwrap_or(0),
                        function: function.unwrap_or_else(|| UNKNOWN_MODULE.to_string()),
                    });
                }
            });
            frames.len() < max_frames
        });

        frames
    }
}

fn is_std_shim(symbol: &str) -> bool {
    let path = symbol.trim_start_matches('<');
    STD_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

fn is_internal(symbol: &str) -> bool {
    let path = symbol.trim_start_matches('<');
    INTERNAL_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Derives the enclosing module of a fully qualified function symbol.
///
/// Closure segments are dropped first, then the function name itself.
/// Returns `None` when the symbol has no module path.
#[must_use]
pub fn module_of(symbol: &str) -> Option<&str> {
    let mut path = symbol;
    loop {
        let (head, last) = path.rsplit_once("::")?;
        if last.starts_with("{{") {
            path = head;
            continue;
        }
        return Some(head);
    }
}
