pub mod hello;
pub mod help;
pub mod status;
pub mod version;

use std::io::Write;

use crate::dispatcher::Dispatcher;

/// Registers the built-in commands on `dispatcher`.
pub fn register_builtins<W: Write + 'static>(dispatcher: &mut Dispatcher<W>) {
    dispatcher.register_command(hello::NAME, hello::run::<W>);
    dispatcher.register_command(help::NAME, help::run::<W>);
    dispatcher.register_command(status::NAME, status::run::<W>);
    dispatcher.register_command(version::NAME, version::run::<W>);
}
