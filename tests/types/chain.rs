use crate::common::LibraryError;
use error_trace::{declare, Error, ErrorTemplate, Node};
use std::error::Error as StdError;

static ERR_OUTER: ErrorTemplate = declare!("outer", capture = false);
static ERR_MIDDLE: ErrorTemplate = declare!("middle {}", capture = false);

fn three_level_chain() -> Error {
    ERR_OUTER
        .raise(&[])
        .cause(ERR_MIDDLE.raise(&[&1]).cause(LibraryError("leaf")))
}

#[test]
fn chain_walks_from_receiver_to_leaf() {
    let err = three_level_chain();
    let messages: Vec<_> = err.chain().map(|node| node.message()).collect();

    assert_eq!(messages, ["outer", "middle 1", "leaf"]);
}

#[test]
fn chain_marks_foreign_leaf() {
    let err = three_level_chain();
    let nodes: Vec<Node<'_>> = err.chain().collect();

    assert!(nodes[0].as_error().is_some());
    assert!(nodes[1].as_error().is_some());
    let leaf = nodes[2].as_foreign().unwrap();
    assert_eq!(leaf.type_name(), std::any::type_name::<LibraryError>());
    assert_eq!(leaf.message(), "leaf");
    assert!(leaf.error().downcast_ref::<LibraryError>().is_some());
}

#[test]
fn raised_cause_is_linked_not_wrapped() {
    let err = ERR_OUTER.raise(&[]).cause(ERR_MIDDLE.raise(&[&2]));

    match err.direct_cause() {
        Some(Node::Raised(cause)) => assert!(ERR_MIDDLE.is(cause)),
        other => panic!("expected a raised cause, got {other:?}"),
    }
}

#[test]
fn boxed_raised_cause_is_linked() {
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(ERR_MIDDLE.raise(&[&3]));
    let err = ERR_OUTER.raise(&[]).cause_boxed(boxed);

    assert!(err.direct_cause().and_then(|node| node.as_error()).is_some());
    assert!(err.has(&ERR_MIDDLE));
}

#[test]
fn boxed_foreign_cause_stays_foreign() {
    let boxed: Box<dyn StdError + Send + Sync> = "plain failure".into();
    let err = ERR_OUTER.raise(&[]).cause_boxed(boxed);

    let foreign = err.direct_cause().and_then(|node| node.as_foreign()).unwrap();
    assert_eq!(foreign.message(), "plain failure");
    assert_eq!(err.to_string(), "outer: plain failure");
}

#[test]
fn std_source_follows_the_chain() {
    let err = three_level_chain();

    let middle = err.source().unwrap();
    assert_eq!(middle.to_string(), "middle 1: leaf");
    let leaf = middle.source().unwrap();
    assert_eq!(leaf.to_string(), "leaf");
    assert!(leaf.source().is_none());
}

#[test]
fn chain_without_cause_yields_only_receiver() {
    let err = ERR_OUTER.raise(&[]);
    assert_eq!(err.chain().count(), 1);
    assert!(err.direct_cause().is_none());
}
