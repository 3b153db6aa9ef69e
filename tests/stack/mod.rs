use crate::common::{FixedCapturer, EMPTY_STACK};
use error_trace::stack::{module_of, UNKNOWN_MODULE};
use error_trace::{BacktraceCapturer, StackCapturer, MAX_FRAMES};

#[test]
fn module_of_strips_the_function_name() {
    assert_eq!(module_of("app::repo::find_user"), Some("app::repo"));
    assert_eq!(module_of("app::find_user"), Some("app"));
}

#[test]
fn module_of_skips_closure_segments() {
    assert_eq!(module_of("app::repo::find_user::{{closure}}"), Some("app::repo"));
    assert_eq!(module_of("app::run::{{closure}}::{{closure}}"), Some("app"));
}

#[test]
fn module_of_without_path_is_none() {
    assert_eq!(module_of("main"), None);
    assert_eq!(module_of(""), None);
    assert_eq!(UNKNOWN_MODULE, "unknown");
}

#[test]
fn backtrace_capturer_starts_at_caller() {
    let frames = BacktraceCapturer.capture(MAX_FRAMES);

    assert!(!frames.is_empty());
    assert!(!frames[0].function.starts_with("backtrace::"));
    assert!(!frames[0].function.contains("BacktraceCapturer"));
    assert!(frames.iter().any(|frame| frame.function.ends_with("backtrace_capturer_starts_at_caller")));
}

#[test]
fn backtrace_capturer_respects_bound() {
    assert!(BacktraceCapturer.capture(2).len() <= 2);
    assert!(BacktraceCapturer.capture(0).is_empty());
}

#[test]
fn backtrace_capturer_resolves_caller_symbol() {
    let symbol = BacktraceCapturer.caller_symbol().unwrap();
    assert!(symbol.ends_with("backtrace_capturer_resolves_caller_symbol"));
}

#[test]
fn caller_symbol_skips_std_call_shims() {
    static INLINED_CALLER: FixedCapturer = FixedCapturer(&[
        ("/rustc/library/core/src/ops/function.rs", 250, "core::ops::function::FnOnce::call_once"),
        ("/rustc/library/std/src/rt.rs", 40, "<std::panic::AssertUnwindSafe<F> as core::ops::function::FnOnce<()>>::call_once"),
        ("src/billing.rs", 12, "app::billing::init"),
    ]);

    let symbol = INLINED_CALLER.caller_symbol().unwrap();
    assert_eq!(symbol, "app::billing::init");
    assert_eq!(module_of(&symbol), Some("app::billing"));
}

#[test]
fn caller_symbol_of_only_std_frames_is_none() {
    static STD_ONLY: FixedCapturer =
        FixedCapturer(&[("/rustc/library/core/src/ops/function.rs", 250, "core::ops::function::FnOnce::call_once")]);

    assert!(STD_ONLY.caller_symbol().is_none());
    assert!(EMPTY_STACK.caller_symbol().is_none());
}
