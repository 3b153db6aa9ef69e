use crate::common::LibraryError;
use error_trace::{declare, extra, raise, ErrorTemplate};

static ERR_TRANSFER: ErrorTemplate = declare!("cannot transfer {} to {}");
static ERR_SYNC: ErrorTemplate = declare!("sync failed", capture = false);
static ERR_TRAILING: ErrorTemplate = declare!("trailing", capture = false,);

#[test]
fn declare_takes_module_from_call_site() {
    assert_eq!(ERR_TRANSFER.module(), module_path!());
    assert_eq!(ERR_TRANSFER.kind(), "cannot transfer {} to {}");
    assert!(ERR_TRANSFER.captures_stack());
    assert!(!ERR_SYNC.captures_stack());
    assert!(!ERR_TRAILING.captures_stack());
}

#[test]
fn declare_in_nested_module() {
    mod billing {
        use error_trace::{declare, ErrorTemplate};

        pub static ERR_INVOICE: ErrorTemplate = declare!("invoice {} missing");
    }

    assert!(billing::ERR_INVOICE.module().ends_with("::billing"));
    assert!(!billing::ERR_INVOICE.is(&ERR_TRANSFER));
}

#[test]
fn raise_with_mixed_arguments() {
    let err = raise!(ERR_TRANSFER, 120, "ARN3107");
    assert_eq!(err.message(), "cannot transfer 120 to ARN3107");
    assert!(ERR_TRANSFER.is(&err));
}

#[test]
fn raise_without_arguments() {
    assert_eq!(raise!(ERR_SYNC).message(), "sync failed");
    assert_eq!(raise!(ERR_SYNC,).message(), "sync failed");
}

#[test]
fn raise_result_chains_like_a_method_call() {
    let err = raise!(ERR_TRANSFER, 5, "ARN1")
        .tag("currency", "EUR")
        .cause(LibraryError("insufficient funds"));

    assert_eq!(err.to_string(), "cannot transfer 5 to ARN1: insufficient funds");
    assert_eq!(err.tag_map()["currency"], "EUR");
}

#[test]
fn raise_captures_the_macro_call_site() {
    let err = raise!(ERR_TRANSFER, 1, 2);
    assert!(err.frames()[0].function.ends_with("raise_captures_the_macro_call_site"));
}

#[test]
fn extra_accepts_mixed_value_types() {
    let err = raise!(ERR_SYNC).extra(extra! {
        "attempt" => 3,
        "host" => "db-1",
        "retryable" => false,
        "shards" => [1, 2],
    });

    let extra = err.extra_data();
    assert_eq!(extra["attempt"], 3);
    assert_eq!(extra["host"], "db-1");
    assert_eq!(extra["retryable"], false);
    assert_eq!(extra["shards"], serde_json::json!([1, 2]));
}

#[test]
fn extra_accepts_expressions_as_keys() {
    let key = String::from("userID");
    let err = raise!(ERR_SYNC).extra(extra! { key.clone() => 310700 });
    assert_eq!(err.extra_data()[&key], 310700);
}
