//! Three-layer service raising, wrapping and reporting errors.
//!
//! Run with `cargo run --example deposit`.

use error_trace::prelude::*;
use std::fmt;

#[derive(Debug)]
struct DriverError;

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("other library error")
    }
}

impl std::error::Error for DriverError {}

mod repository {
    use super::DriverError;
    use error_trace::prelude::*;

    pub static ERR_USER_NOT_FOUND: ErrorTemplate = declare!("user {} not found");

    pub fn find_user(user_id: u64, name: &str, account: &str) -> Result<()> {
        Err(raise!(ERR_USER_NOT_FOUND, name)
            .extra(extra! {
                "userID" => user_id,
                "accountID" => account,
            })
            .tag("table", "users")
            .cause(DriverError))
    }
}

mod usecase {
    use super::repository;
    use error_trace::prelude::*;

    pub static ERR_CANNOT_DEPOSIT: ErrorTemplate = declare!("cannot deposit");

    pub fn deposit(account: &str, amount: u64) -> Result<()> {
        repository::find_user(310700, "Alex", account).map_err(|e| {
            raise!(ERR_CANNOT_DEPOSIT)
                .with("cannot add money to account {}", &[&account])
                .extra([("amount", amount)])
                .cause(e)
        })
    }
}

fn view() -> Result<()> {
    usecase::deposit("ARN3107", 120)
}

fn main() {
    let Err(err) = view() else {
        return;
    };

    println!("{err:#?}");

    assert!(err.is(&usecase::ERR_CANNOT_DEPOSIT));
    assert!(err.has(&repository::ERR_USER_NOT_FOUND));
    assert!(err.has(&DriverError));

    let event = err.sentry_report();
    match serde_json::to_string_pretty(&event) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("cannot encode event: {e}"),
    }
}
