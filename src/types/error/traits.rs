use super::Error;
use crate::types::report::ReportConfig;
use core::fmt::{self, Debug, Display};
use serde::{Serialize, Serializer};
use std::error::Error as StdError;

/// `{}` renders the flattened chain of messages; `{:#}` renders the full report.
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.report(), f);
        }

        f.write_str(&self.message)?;
        for node in self.chain().skip(1) {
            write!(f, ": {}", node.message())?;
        }
        Ok(())
    }
}

/// `{:?}` renders this error's own report; `{:#?}` renders the whole chain.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = ReportConfig::full().include_all(f.alternate());
        Display::fmt(&self.report().config(config), f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|link| link.as_std())
    }
}

/// Serializes as the flattened message string.
impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
