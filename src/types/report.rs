//! Multi-line error reports.
//!
//! A report starts with the flattened message, then walks the chain printing
//! each link's captured frames (outermost first), its message and its extra
//! data. Frames already printed by an earlier link are collapsed into a
//! single `[...]` marker per link.
//!
//! Colors are a [`Palette`] choice. [`Palette::ansi`] is the default;
//! [`Palette::plain`] renders the same layout without escape sequences.
//!
//! # Examples
//!
//! ```
//! use error_trace::{declare, ErrorTemplate, ReportConfig};
//!
//! static ERR_SYNC: ErrorTemplate = declare!("sync failed", capture = false);
//!
//! let err = ERR_SYNC.raise(&[]).extra([("attempt", 3)]);
//!
//! let report = err.report().config(ReportConfig::plain()).to_string();
//! assert_eq!(
//!     report,
//!     "sync failed\n\
//!      \n\
//!      Traceback (most recent call last):\n    \
//!      (Stack trace not available)\n\
//!      sync failed\n    \
//!      attempt=3\n"
//! );
//! ```

use crate::types::error::render_value;
use crate::types::{Error, ForeignError, Node};
use core::fmt::{self, Display};
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

static ANSI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI escape pattern is valid"));

/// Removes ANSI color escape sequences from `text`.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_PATTERN.replace_all(text, "")
}

/// Escape sequences wrapped around the colored parts of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub headline: &'static str,
    pub message: &'static str,
    pub reset: &'static str,
}

impl Palette {
    /// Bold bright red headline, red messages.
    #[inline]
    pub const fn ansi() -> Self {
        Self { headline: "\x1b[1;91m", message: "\x1b[0;31m", reset: "\x1b[0m" }
    }

    /// No escape sequences at all.
    #[inline]
    pub const fn plain() -> Self {
        Self { headline: "", message: "", reset: "" }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

/// Rendering options for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Render every link of the chain, not only the first.
    pub include_all: bool,
    pub palette: Palette,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl ReportConfig {
    /// Whole chain, colored.
    #[inline]
    pub const fn full() -> Self {
        Self { include_all: true, palette: Palette::ansi() }
    }

    /// First link only, colored.
    #[inline]
    pub const fn first() -> Self {
        Self { include_all: false, palette: Palette::ansi() }
    }

    /// Whole chain, without colors.
    #[inline]
    pub const fn plain() -> Self {
        Self { include_all: true, palette: Palette::plain() }
    }

    #[inline]
    pub const fn include_all(mut self, all: bool) -> Self {
        self.include_all = all;
        self
    }

    #[inline]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Builder for customizing report output.
pub struct ReportBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ReportConfig::default() }
    }

    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders only the first link when `false`.
    pub fn all(mut self, all: bool) -> Self {
        self.config.include_all = all;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn plain(self) -> Self {
        self.palette(Palette::plain())
    }
}

impl Display for ReportBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = &self.config.palette;
        writeln!(f, "{}{}{}", palette.headline, self.error, palette.reset)?;
        writeln!(f)?;
        writeln!(f, "Traceback (most recent call last):")?;

        let mut seen = HashSet::new();
        for (depth, node) in self.error.chain().enumerate() {
            if depth > 0 {
                if !self.config.include_all {
                    break;
                }
                writeln!(f)?;
                writeln!(f, "Caused by the following error:")?;
            }

            match node {
                Node::Raised(error) => write_raised(f, error, palette, &mut seen)?,
                Node::Foreign(foreign) => write_foreign(f, foreign, palette)?,
            }
        }

        Ok(())
    }
}

fn write_raised(
    f: &mut fmt::Formatter<'_>,
    error: &Error,
    palette: &Palette,
    seen: &mut HashSet<String>,
) -> fmt::Result {
    if error.frames.is_empty() {
        writeln!(f, "    (Stack trace not available)")?;
    } else {
        let mut elided = false;
        for frame in error.frames.iter().rev() {
            let location = frame.location();
            if !seen.contains(&location) {
                writeln!(f, "    {location}")?;
                writeln!(f, "        {}", frame.function)?;
                seen.insert(location);
            } else if !elided {
                elided = true;
                writeln!(f, "    [...]")?;
            }
        }
    }

    writeln!(f, "{}{}{}", palette.message, error.message, palette.reset)?;

    if !error.extra.is_empty() {
        f.write_str("    ")?;
        for (i, (key, value)) in error.extra.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={}", render_value(value))?;
        }
        writeln!(f)?;
    }

    Ok(())
}

fn write_foreign(f: &mut fmt::Formatter<'_>, foreign: &ForeignError, palette: &Palette) -> fmt::Result {
    writeln!(f, "    (Stack trace not available)")?;
    writeln!(
        f,
        "{}{}{} ({})",
        palette.message,
        foreign,
        palette.reset,
        foreign.type_name()
    )
}
