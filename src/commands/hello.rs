use std::io::Write;

use crate::printer::Printer;

pub const NAME: &str = "hello";
pub const DEFAULT_SUBJECT: &str = "World";

/// Builds the greeting for the subject at position 2 of `argv`.
pub fn message(argv: &[String]) -> String {
    let subject = argv.get(2).map_or(DEFAULT_SUBJECT, String::as_str);
    format!("Hello {subject}!")
}

pub fn run<W: Write>(argv: &[String], printer: &mut Printer<W>) {
    printer.display(&message(argv));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn greets_world_without_subject() {
        assert_eq!(message(&argv(&["fly", "hello"])), "Hello World!");
    }

    #[test]
    fn greets_subject_and_ignores_the_rest() {
        assert_eq!(message(&argv(&["fly", "hello", "Ada", "Lovelace"])), "Hello Ada!");
    }

    #[test]
    fn empty_subject_is_kept() {
        assert_eq!(message(&argv(&["fly", "hello", ""])), "Hello !");
    }
}
