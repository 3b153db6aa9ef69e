//! Error types and utilities.
//!
//! This module holds the data model: [`ErrorTemplate`] declarations, raised
//! [`Error`] instances and their cause [`Chain`], captured [`Frame`]s, and the
//! two renderings of a chain (text [`report`] and structured [`event`]).
//!
//! # Examples
//!
//! ```
//! use error_trace::types::{ErrorTemplate, Node};
//!
//! static ERR_QUERY: ErrorTemplate = ErrorTemplate::new("query {} failed", "app::db");
//!
//! let err = ERR_QUERY.raise(&[&"select"]).cause(std::fmt::Error);
//!
//! let nodes: Vec<Node<'_>> = err.chain().collect();
//! assert_eq!(nodes.len(), 2);
//! assert!(matches!(nodes[0], Node::Raised(raised) if raised.kind() == "query {} failed"));
//! assert!(matches!(nodes[1], Node::Foreign(_)));
//! ```

pub mod chain;
pub mod error;
pub mod event;
pub mod frame;
pub mod message;
pub mod report;
pub mod template;

pub use chain::*;
pub use error::*;
pub use frame::*;
pub use message::*;
pub use template::*;

/// Result alias whose failure side defaults to a raised [`Error`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type, [`Error`] unless overridden
pub type Result<T, E = Error> = core::result::Result<T, E>;
