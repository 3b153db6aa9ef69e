//! Structured events for external error trackers.
//!
//! [`Error::sentry_report`] projects a whole chain into one [`Event`]: the
//! plain-text report as its message, one [`Exception`] per link ordered
//! innermost first (so the raised error itself comes last), and the merged
//! extra data and tags of every link. Delivering the event is left to an
//! [`EventSink`].

use crate::types::report::strip_ansi;
use crate::types::{Error, ForeignError, Frame, Node};
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Severity of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

/// One source location of an exception's stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFrame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl From<&Frame> for EventFrame {
    fn from(frame: &Frame) -> Self {
        Self { function: frame.function.clone(), file: frame.file.clone(), line: frame.line }
    }
}

/// Frames of an exception, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stacktrace {
    pub frames: Vec<EventFrame>,
}

/// One link of the reported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exception {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<Stacktrace>,
}

impl Exception {
    fn raised(error: &Error) -> Self {
        let stacktrace = (!error.frames.is_empty()).then(|| Stacktrace {
            frames: error.frames.iter().rev().map(EventFrame::from).collect(),
        });

        Self {
            ty: error.kind.to_string(),
            value: error.to_string(),
            module: Some(error.module.to_string()),
            stacktrace,
        }
    }

    fn foreign(foreign: &ForeignError) -> Self {
        Self {
            ty: foreign.type_name().to_string(),
            value: foreign.message(),
            module: None,
            stacktrace: None,
        }
    }
}

/// Structured payload handed to an error-tracking service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub message: String,
    pub level: Level,
    pub tags: BTreeMap<String, String>,
    pub extra: BTreeMap<String, Value>,
    pub exceptions: Vec<Exception>,
    pub fingerprint: Vec<String>,
}

impl Event {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            tags: BTreeMap::new(),
            extra: BTreeMap::new(),
            exceptions: Vec::new(),
            fingerprint: Vec::new(),
        }
    }
}

/// Transport that delivers events, such as a Sentry client.
pub trait EventSink {
    type Error;

    fn capture_event(&self, event: Event) -> Result<(), Self::Error>;
}

impl Error {
    /// Builds the structured event describing this error and its whole chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::{declare, ErrorTemplate, Level};
    ///
    /// static ERR_CANNOT_DEPOSIT: ErrorTemplate = declare!("cannot deposit");
    /// static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");
    ///
    /// let err = ERR_CANNOT_DEPOSIT.raise(&[]).cause(
    ///     ERR_USER_NOT_FOUND
    ///         .raise(&[&"Alex"])
    ///         .extra([("userID", 310700)])
    ///         .cause(std::io::Error::other("other library error")),
    /// );
    ///
    /// let event = err.sentry_report();
    /// assert_eq!(event.level, Level::Error);
    /// assert_eq!(event.exceptions.len(), 3);
    /// assert_eq!(event.exceptions[2].ty, "cannot deposit");
    /// assert_eq!(event.extra["userID"], 310700);
    /// assert!(!event.message.contains('\x1b'));
    /// ```
    #[must_use]
    pub fn sentry_report(&self) -> Event {
        let mut event = Event::new(Level::Error, strip_ansi(&self.string_report(true)));
        event.tags.insert("package".to_string(), self.module.to_string());

        let nodes: SmallVec<[Node<'_>; 4]> = self.chain().collect();
        for node in nodes.iter().rev() {
            match *node {
                Node::Raised(error) => {
                    event.extra.extend(error.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
                    event.tags.extend(error.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
                    event.exceptions.push(Exception::raised(error));
                },
                Node::Foreign(foreign) => event.exceptions.push(Exception::foreign(foreign)),
            }
        }

        event.fingerprint.push(self.fingerprint_hex());
        event
    }

    /// Reports this error through `sink`.
    pub fn capture<S>(&self, sink: &S) -> Result<(), S::Error>
    where
        S: EventSink + ?Sized,
    {
        sink.capture_event(self.sentry_report())
    }
}
