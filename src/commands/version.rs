use std::io::Write;

use crate::printer::Printer;

pub const NAME: &str = "version";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from, stamped through `FLY_COMMIT_HASH` at
/// compile time.
pub const COMMIT_HASH: &str = match option_env!("FLY_COMMIT_HASH") {
    Some(hash) => hash,
    None => "unknown",
};

/// Build date, stamped through `FLY_BUILD_DATE` at compile time.
pub const BUILD_DATE: &str = match option_env!("FLY_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

pub fn message() -> String {
    format!("fly-cli version {VERSION}")
}

pub fn run<W: Write>(_argv: &[String], printer: &mut Printer<W>) {
    printer.display(&message());
    printer.display(&format!("commit: {COMMIT_HASH}"));
    printer.display(&format!("built: {BUILD_DATE}"));
}
