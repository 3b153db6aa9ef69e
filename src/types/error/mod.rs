//! Raised error instances.
//!
//! This module provides [`Error`], the value produced by
//! [`ErrorTemplate::raise`]. Between the raise and the `return` that hands it
//! upward, the raising call site enriches it with:
//! - more message context ([`with`](Error::with))
//! - extra key/value data and classification tags
//! - a cause, either another raised error or any foreign error value
//! - a trimmed stack ([`skip`](Error::skip)) when raised from a helper
//!
//! After that it is only read: compared, searched, rendered or reported.

use crate::types::chain::Link;
use crate::types::report::{ReportBuilder, ReportConfig};
use crate::types::{format_message, Chain, ErrorTemplate, Frame, Node};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::Display;

mod fingerprint;
mod traits;

pub use fingerprint::FingerprintConfig;

/// Error raised from an [`ErrorTemplate`], with its context and cause.
///
/// Mutators consume and return the error so they chain from the raise:
///
/// ```
/// use error_trace::{declare, ErrorTemplate};
///
/// static ERR_CANNOT_DEPOSIT: ErrorTemplate = declare!("cannot deposit");
///
/// let err = ERR_CANNOT_DEPOSIT
///     .raise(&[])
///     .with("cannot add money to account {}", &[&"ARN3107"])
///     .extra([("amount", 120)])
///     .tag("team", "payments")
///     .cause(std::io::Error::other("other library error"));
///
/// assert_eq!(
///     err.to_string(),
///     "cannot deposit: cannot add money to account ARN3107: other library error"
/// );
/// ```
#[must_use]
pub struct Error {
    pub(crate) kind: &'static str,
    pub(crate) module: Cow<'static, str>,
    pub(crate) message: String,
    pub(crate) cause: Option<Link>,
    pub(crate) extra: BTreeMap<String, Value>,
    pub(crate) tags: BTreeMap<String, String>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) capture_stack: bool,
}

impl Error {
    pub(crate) fn from_template(template: &ErrorTemplate, message: String, frames: Vec<Frame>) -> Self {
        Self {
            kind: template.kind,
            module: template.module.clone(),
            message,
            cause: None,
            extra: BTreeMap::new(),
            tags: BTreeMap::new(),
            frames,
            capture_stack: template.captures_stack(),
        }
    }

    /// Drops the `n` innermost captured frames, or all of them if there are
    /// fewer. Does nothing when stack capture is disabled.
    pub fn skip(mut self, n: usize) -> Self {
        if self.capture_stack {
            let n = n.min(self.frames.len());
            self.frames.drain(..n);
        }
        self
    }

    /// Appends `": "` and the formatted context to the message.
    pub fn with(mut self, format: &str, args: &[&dyn Display]) -> Self {
        self.message.push_str(": ");
        self.message.push_str(&format_message(format, args));
        self
    }

    /// Appends `": "` and an already rendered context to the message.
    pub fn with_message(mut self, message: impl Display) -> Self {
        use core::fmt::Write;
        let _ = write!(self.message, ": {message}");
        self
    }

    /// Merges extra data, overwriting existing keys.
    pub fn extra<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra.extend(entries.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    /// Sets a single extra entry.
    pub fn extra_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Merges tags, rendering values with `Display` and overwriting existing keys.
    pub fn tags<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        self.tags.extend(entries.into_iter().map(|(key, value)| (key.into(), value.to_string())));
        self
    }

    /// Sets a single tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.tags.insert(key.into(), value.to_string());
        self
    }

    /// Attaches the direct cause, replacing any earlier one.
    ///
    /// A raised [`Error`] is linked as such; anything else becomes a
    /// [`ForeignError`](crate::ForeignError) leaf.
    pub fn cause<E>(mut self, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Link::new(error));
        self
    }

    /// Attaches an already boxed cause, replacing any earlier one.
    pub fn cause_boxed(mut self, error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        self.cause = Some(Link::from_boxed(error, BOXED_TYPE_NAME));
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

    /// The error's own message, without its causes.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The directly attached cause, if any.
    #[inline]
    pub fn direct_cause(&self) -> Option<Node<'_>> {
        self.cause.as_ref().map(Link::node)
    }

    /// Extra data merged so far, in key order.
    #[inline]
    pub fn extra_data(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Tags merged so far, in key order.
    #[inline]
    pub fn tag_map(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Captured frames, innermost first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn captures_stack(&self) -> bool {
        self.capture_stack
    }

    /// Iterates the chain from this error down to its deepest cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The deepest link of the chain, which is `self` when there is no cause.
    pub fn root_cause(&self) -> Node<'_> {
        self.chain().last().unwrap_or(Node::Raised(self))
    }

    /// Returns true when `candidate` is an error or template with the same
    /// kind and module.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::{declare, ErrorTemplate};
    ///
    /// static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
    /// static ERR_ALEX_NOT_FOUND: ErrorTemplate = declare!("user Alex not found");
    ///
    /// let err = ERR_USER_NOT_FOUND.raise(&[&"Alex"]);
    /// assert!(err.is(&ERR_USER_NOT_FOUND.raise(&[&"Bob"])));
    /// assert!(!err.is(&ERR_ALEX_NOT_FOUND.raise(&[])));
    /// ```
    #[must_use]
    pub fn is(&self, candidate: &(dyn StdError + 'static)) -> bool {
        identity_of(candidate)
            .is_some_and(|(kind, module)| kind == self.kind && module == self.module)
    }

    /// Returns true when any link of the chain matches `candidate`.
    ///
    /// Raised links match by [`is`](Self::is). A foreign leaf matches when it
    /// is the same value as `candidate` or renders the same message.
    #[must_use]
    pub fn has(&self, candidate: &(dyn StdError + 'static)) -> bool {
        self.chain().any(|node| match node {
            Node::Raised(error) => error.is(candidate),
            Node::Foreign(foreign) => foreign.matches(candidate),
        })
    }

    /// Returns a builder rendering the multi-line report of this error.
    #[inline]
    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(self)
    }

    /// Colorized report of this error, and of its whole chain when `all`.
    #[must_use]
    pub fn string_report(&self, all: bool) -> String {
        self.report().config(ReportConfig::full().include_all(all)).to_string()
    }
}

const BOXED_TYPE_NAME: &str = "Box<dyn Error>";

/// Identity key of raised errors and templates.
pub(crate) fn identity_of<'a>(candidate: &'a (dyn StdError + 'static)) -> Option<(&'a str, &'a str)> {
    if let Some(error) = candidate.downcast_ref::<Error>() {
        return Some((error.kind(), error.module()));
    }
    candidate.downcast_ref::<ErrorTemplate>().map(|template| (template.kind(), template.module()))
}

/// Renders an extra value the way reports show it: strings without quotes.
pub(crate) fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}
