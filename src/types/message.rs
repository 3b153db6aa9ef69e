//! Runtime message formatting.
//!
//! Template messages are plain strings, so their placeholders are filled at
//! raise time rather than by `format!`. The rules are deliberately lenient:
//! a raise must never fail because its arguments do not fit the message.
//!
//! - `{}` takes the next positional argument, `{N}` takes argument `N`.
//! - A format spec after `:` is accepted and ignored (`{:>8}` renders as `{}`).
//! - `{{` and `}}` are escapes for literal braces.
//! - A placeholder without a matching argument is kept verbatim.
//! - Unused arguments are appended as ` (extra args: a, b)`.
//!
//! # Examples
//!
//! ```
//! use error_trace::types::format_message;
//!
//! assert_eq!(format_message("user {} not found", &[&"Alex"]), "user Alex not found");
//! assert_eq!(format_message("{1} before {0}", &[&"b", &"a"]), "a before b");
//! assert_eq!(format_message("user {} not found", &[]), "user {} not found");
//! assert_eq!(format_message("done", &[&42]), "done (extra args: 42)");
//! ```

use core::fmt::{Display, Write};
use smallvec::{smallvec, SmallVec};

/// Substitutes `args` into `format`, never failing.
#[must_use]
pub fn format_message(format: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut used: SmallVec<[bool; 8]> = smallvec![false; args.len()];
    let mut next = 0;
    let mut rest = format;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };
        let inner = &tail[1..end];
        let selector = inner.split_once(':').map_or(inner, |(index, _)| index);
        let index = if selector.is_empty() {
            next += 1;
            Some(next - 1)
        } else {
            selector.trim().parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i).map(|arg| (i, arg))) {
            Some((i, arg)) => {
                let _ = write!(out, "{arg}");
                used[i] = true;
            },
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);

    let mut surplus = args.iter().zip(&used).filter(|(_, used)| !**used).map(|(arg, _)| arg);
    if let Some(first) = surplus.next() {
        let _ = write!(out, " (extra args: {first}");
        for arg in surplus {
            let _ = write!(out, ", {arg}");
        }
        out.push(')');
    }

    out
}
