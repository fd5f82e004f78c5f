use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod printer;
pub mod registry;

pub use dispatcher::Dispatcher;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
pub fn run() -> Result<()> {
    init_tracing();

    let argv = cli::Args::capture(std::env::args_os())
        .context("failed to read command-line arguments")?
        .into_argv();

    let mut dispatcher = Dispatcher::new();
    commands::register_builtins(&mut dispatcher);
    dispatcher.run(&argv);
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
