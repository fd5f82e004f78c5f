use std::io::Write;

use crate::printer::Printer;

pub const NAME: &str = "help";
pub const USAGE: &str = "usage: fly hello [ your-name ]";

pub fn run<W: Write>(_argv: &[String], printer: &mut Printer<W>) {
    printer.display(USAGE);
}
