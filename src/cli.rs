use std::ffi::OsString;

use clap::Parser;

/// Command-line capture for the fly CLI.
///
/// Every token is positional; flags such as `--help` and separators such as
/// `--` are passed through as command names rather than interpreted.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fly",
    about = "A minimal command dispatcher.",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Args {
    /// Position 0 of the argument vector, as invoked.
    #[arg(skip)]
    pub program: String,

    #[arg(allow_hyphen_values = true, num_args = 0..)]
    pub argv: Vec<String>,
}

impl Args {
    /// Parses a raw argument vector, keeping every token after the program
    /// name verbatim.
    ///
    /// An escape is inserted ahead of the user's tokens so clap stops option
    /// processing before the first one; a `--` typed by the user is then an
    /// ordinary value.
    pub fn capture<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut raw = raw.into_iter().map(Into::into);
        let program = raw
            .next()
            .unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")));

        let escaped = [program.clone(), OsString::from("--")]
            .into_iter()
            .chain(raw);
        let mut args = Self::try_parse_from(escaped)?;
        args.program = program.to_string_lossy().into_owned();
        Ok(args)
    }

    /// Returns the full argument vector, program name first.
    pub fn into_argv(self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.argv.len() + 1);
        argv.push(self.program);
        argv.extend(self.argv);
        argv
    }
}
