use crate::common::{LibraryError, API_STACK, REPO_STACK};
use error_trace::{declare, strip_ansi, Error, ErrorTemplate, Palette, ReportConfig};

static ERR_CANNOT_DEPOSIT: ErrorTemplate = declare!("cannot deposit").with_capturer(&API_STACK);
static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found").with_capturer(&REPO_STACK);
static ERR_NO_STACK: ErrorTemplate = declare!("no stack", capture = false);

fn deposit_chain() -> Error {
    ERR_CANNOT_DEPOSIT
        .raise(&[])
        .with("cannot add money to account {}", &[&"ARN3107"])
        .cause(
            ERR_USER_NOT_FOUND
                .raise(&[&"Alex"])
                .extra([("userID", 310700)])
                .extra([("accountID", "ARN3107")])
                .cause(LibraryError("other library error")),
        )
}

#[test]
fn plain_report_layout() {
    let report = deposit_chain().report().plain().to_string();

    let expected = format!(
        "cannot deposit: cannot add money to account ARN3107: user Alex not found: other library error\n\
         \n\
         Traceback (most recent call last):\n\
         \x20   src/main.rs:10\n\
         \x20       app::main\n\
         \x20   src/api.rs:30\n\
         \x20       app::api::view\n\
         cannot deposit: cannot add money to account ARN3107\n\
         \n\
         Caused by the following error:\n\
         \x20   [...]\n\
         \x20   src/api.rs:20\n\
         \x20       app::api::view\n\
         \x20   src/service.rs:41\n\
         \x20       app::service::deposit\n\
         \x20   src/repo.rs:50\n\
         \x20       app::repo::find_user\n\
         user Alex not found\n\
         \x20   accountID=ARN3107 userID=310700\n\
         \n\
         Caused by the following error:\n\
         \x20   (Stack trace not available)\n\
         other library error ({})\n",
        std::any::type_name::<LibraryError>()
    );
    assert_eq!(report, expected);
}

#[test]
fn shared_frames_print_once() {
    let report = deposit_chain().report().plain().to_string();

    assert_eq!(report.matches("src/main.rs:10").count(), 1);
    assert_eq!(report.matches("[...]").count(), 1);
}

#[test]
fn repeated_frames_collapse_to_one_marker_per_link() {
    let err = ERR_USER_NOT_FOUND
        .raise(&[&"Alex"])
        .cause(ERR_USER_NOT_FOUND.raise(&[&"Bob"]));
    let report = err.report().plain().to_string();

    assert_eq!(report.matches("src/repo.rs:50").count(), 1);
    assert_eq!(report.matches("    [...]\n").count(), 1);
}

#[test]
fn full_report_separates_every_link() {
    let report = deposit_chain().string_report(true);

    assert_eq!(report.matches("Caused by the following error:").count(), 2);
    assert!(report.contains("user Alex not found"));
    assert!(report.contains("other library error"));
}

#[test]
fn first_report_stops_at_receiver() {
    let report = deposit_chain().string_report(false);

    assert!(!report.contains("Caused by the following error:"));
    assert!(!report.contains("src/repo.rs:50"));
    assert!(!report.contains("userID"));
    // the headline still flattens the whole chain
    assert!(report.contains("other library error"));
}

#[test]
fn colored_report_strips_to_plain() {
    let err = deposit_chain();
    let colored = err.string_report(true);

    assert!(colored.starts_with("\x1b[1;91m"));
    assert!(colored.contains("\x1b[0;31muser Alex not found\x1b[0m"));
    assert_eq!(strip_ansi(&colored), err.report().plain().to_string());
}

#[test]
fn missing_stack_is_marked() {
    let report = ERR_NO_STACK.raise(&[]).report().plain().to_string();
    assert!(report.contains("    (Stack trace not available)\nno stack\n"));
}

#[test]
fn formatting_verbs_select_rendering() {
    let err = deposit_chain();

    assert_eq!(format!("{err}"), err.to_string());
    assert_eq!(format!("{err:?}"), err.string_report(false));
    assert_eq!(format!("{err:#?}"), err.string_report(true));
    assert_eq!(format!("{err:#}"), err.string_report(true));
}

#[test]
fn config_presets() {
    assert_eq!(ReportConfig::default(), ReportConfig::full());
    assert!(!ReportConfig::first().include_all);
    assert_eq!(ReportConfig::plain().palette, Palette::plain());
    assert_eq!(Palette::default(), Palette::ansi());

    let err = deposit_chain();
    let custom = err
        .report()
        .config(ReportConfig::first().palette(Palette::plain()))
        .to_string();
    assert_eq!(custom, strip_ansi(&err.string_report(false)));
    assert_eq!(err.report().plain().all(false).to_string(), custom);
}
