use std::io::{Stdout, Write};

use crate::error::{CommandResult, FlyError};
use crate::printer::Printer;
use crate::registry::Registry;

/// Command selected when the argument vector has no element at position 1.
pub const DEFAULT_COMMAND: &str = "help";

/// Process exit status used when the requested command is not registered.
pub const COMMAND_NOT_FOUND_EXIT_CODE: i32 = 1;

/// A command body. It receives the full argument vector and the dispatcher's
/// output sink.
pub type Handler<W> = Box<dyn Fn(&[String], &mut Printer<W>)>;

/// Resolves the command named in an argument vector and invokes its handler.
pub struct Dispatcher<W: Write = Stdout> {
    printer: Printer<W>,
    registry: Registry<Handler<W>>,
}

impl Dispatcher<Stdout> {
    pub fn new() -> Self {
        Self::with_printer(Printer::stdout())
    }
}

impl Default for Dispatcher<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Dispatcher<W> {
    pub fn with_printer(printer: Printer<W>) -> Self {
        Self {
            printer,
            registry: Registry::new(),
        }
    }

    pub fn register_command<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[String], &mut Printer<W>) + 'static,
    {
        let name = name.into();
        tracing::debug!(target: "fly::dispatcher", command = %name, "registering command");
        self.registry.register(name, Box::new(handler));
    }

    #[cfg(test)]
    pub(crate) fn is_registered(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Invokes the handler named at position 1 of `argv`, falling back to
    /// [`DEFAULT_COMMAND`]. The handler sees `argv` unchanged.
    pub fn dispatch(&mut self, argv: &[String]) -> CommandResult<()> {
        let name = command_name(argv);
        tracing::debug!(
            target: "fly::dispatcher",
            command = name,
            args = argv.len(),
            registered = self.registry.len(),
            "dispatching"
        );

        let Some(handler) = self.registry.lookup(name) else {
            tracing::debug!(target: "fly::dispatcher", command = name, "command not registered");
            return Err(FlyError::CommandNotFound {
                name: name.to_owned(),
            });
        };

        handler(argv, &mut self.printer);
        Ok(())
    }

    /// Dispatches `argv`. An unknown command is reported through the printer
    /// and ends the process with [`COMMAND_NOT_FOUND_EXIT_CODE`].
    pub fn run(&mut self, argv: &[String]) {
        if let Err(err) = self.dispatch(argv) {
            self.printer.display(&format!("ERROR: {err}"));
            self.printer.flush();
            std::process::exit(COMMAND_NOT_FOUND_EXIT_CODE);
        }
        self.printer.flush();
    }

    pub fn printer(&self) -> &Printer<W> {
        &self.printer
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }
}

/// Returns the command name at position 1 of `argv`, or [`DEFAULT_COMMAND`].
pub fn command_name(argv: &[String]) -> &str {
    argv.get(1).map_or(DEFAULT_COMMAND, String::as_str)
}
