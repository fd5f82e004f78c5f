use std::io::{self, Stdout, Write};

/// Text sink used for all user-visible output.
///
/// Write failures are not reported to callers; they are traced at debug
/// level and otherwise dropped.
#[derive(Debug)]
pub struct Printer<W: Write = Stdout> {
    writer: W,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Appends `text` verbatim.
    pub fn write(&mut self, text: &str) {
        if let Err(error) = self.writer.write_all(text.as_bytes()) {
            tracing::debug!(target: "fly::printer", %error, "failed to write output");
        }
    }

    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Writes `text` followed by a line terminator.
    pub fn display(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn flush(&mut self) {
        if let Err(error) = self.writer.flush() {
            tracing::debug!(target: "fly::printer", %error, "failed to flush output");
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Default for Printer<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn write_appends_text_verbatim() {
        let mut printer = Printer::new(Vec::new());
        printer.write("fly");
        printer.write(" away");
        assert_eq!(output(printer), "fly away");
    }

    #[test]
    fn display_terminates_the_line() {
        let mut printer = Printer::new(Vec::new());
        printer.display("first");
        printer.display("");
        printer.display("third");
        assert_eq!(output(printer), "first\n\nthird\n");
    }

    #[test]
    fn write_failures_are_swallowed() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let mut printer = Printer::new(Broken);
        printer.display("ignored");
        printer.flush();
    }
}
