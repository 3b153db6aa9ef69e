//! Cause chains.
//!
//! Every [`Error`] owns at most one direct cause, either another raised
//! [`Error`] or a [`ForeignError`] from outside this crate. Ownership keeps
//! chains acyclic, and every walk over them goes through the [`Chain`]
//! iterator rather than recursion.

use crate::types::Error;
use std::any;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use std::ptr;

pub(crate) type BoxedStdError = Box<dyn StdError + Send + Sync + 'static>;

/// Owned link from an error to its direct cause.
pub(crate) enum Link {
    Raised(Box<Error>),
    Foreign(ForeignError),
}

impl Link {
    pub(crate) fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error), any::type_name::<E>())
    }

    /// Links a raised [`Error`] as such, anything else as foreign.
    pub(crate) fn from_boxed(error: BoxedStdError, type_name: &'static str) -> Self {
        match error.downcast::<Error>() {
            Ok(raised) => Self::Raised(raised),
            Err(error) => Self::Foreign(ForeignError { type_name, error }),
        }
    }

    #[inline]
    pub(crate) fn node(&self) -> Node<'_> {
        match self {
            Self::Raised(error) => Node::Raised(error),
            Self::Foreign(error) => Node::Foreign(error),
        }
    }

    pub(crate) fn as_std(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Raised(error) => &**error,
            Self::Foreign(foreign) => &*foreign.error,
        }
    }
}

/// Error value from outside this crate, kept as an opaque leaf.
pub struct ForeignError {
    type_name: &'static str,
    error: BoxedStdError,
}

impl ForeignError {
    /// Type name recorded when the error was attached.
    #[inline]
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    #[inline]
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.error
    }

    #[inline]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Same value, or a value that renders the same message.
    pub(crate) fn matches(&self, candidate: &(dyn StdError + 'static)) -> bool {
        let own: &(dyn StdError + 'static) = &*self.error;
        ptr::addr_eq(own, candidate) || own.to_string() == candidate.to_string()
    }
}

impl Debug for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignError")
            .field("type_name", &self.type_name)
            .field("error", &self.error)
            .finish()
    }
}

impl Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

/// Borrowed view of one link in a cause chain.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Raised(&'a Error),
    Foreign(&'a ForeignError),
}

impl<'a> Node<'a> {
    /// The link's own message, without the messages of its causes.
    pub fn message(&self) -> String {
        match self {
            Self::Raised(error) => error.message().to_owned(),
            Self::Foreign(foreign) => foreign.message(),
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&'a Error> {
        match *self {
            Self::Raised(error) => Some(error),
            Self::Foreign(_) => None,
        }
    }

    #[inline]
    pub fn as_foreign(&self) -> Option<&'a ForeignError> {
        match *self {
            Self::Raised(_) => None,
            Self::Foreign(foreign) => Some(foreign),
        }
    }
}

/// Iterator over a cause chain, starting at the error it was created from.
///
/// # Examples
///
/// ```
/// use error_trace::{declare, ErrorTemplate};
///
/// static ERR_OUTER: ErrorTemplate = declare!("outer", capture = false);
/// static ERR_INNER: ErrorTemplate = declare!("inner", capture = false);
///
/// let err = ERR_OUTER.raise(&[]).cause(ERR_INNER.raise(&[]));
/// let messages: Vec<_> = err.chain().map(|node| node.message()).collect();
/// assert_eq!(messages, ["outer", "inner"]);
/// ```
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<Node<'a>>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(head: &'a Error) -> Self {
        Self { next: Some(Node::Raised(head)) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Node::Raised(error) = current {
            self.next = error.direct_cause();
        }
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}
