//! Shared fixtures: fixed stacks and a foreign error type.
#![allow(dead_code)]

use error_trace::{Frame, StackCapturer};
use std::fmt;

/// Capturer returning the same stack on every raise, innermost first.
pub struct FixedCapturer(pub &'static [(&'static str, u32, &'static str)]);

impl StackCapturer for FixedCapturer {
    fn capture(&self, max_frames: usize) -> Vec<Frame> {
        self.0
            .iter()
            .take(max_frames)
            .map(|&(file, line, function)| Frame::new(file, line, function))
            .collect()
    }
}

pub static API_STACK: FixedCapturer =
    FixedCapturer(&[("src/api.rs", 30, "app::api::view"), ("src/main.rs", 10, "app::main")]);

pub static REPO_STACK: FixedCapturer = FixedCapturer(&[
    ("src/repo.rs", 50, "app::repo::find_user"),
    ("src/service.rs", 41, "app::service::deposit"),
    ("src/api.rs", 20, "app::api::view"),
    ("src/main.rs", 10, "app::main"),
]);

pub static EMPTY_STACK: FixedCapturer = FixedCapturer(&[]);

/// Error type standing in for a third-party library error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryError(pub &'static str);

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for LibraryError {}
