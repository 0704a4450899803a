use std::{env, io};

use anyhow::{Context, Result};

pub use args::{Arguments, Command, GenerateArgs};
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;
mod run;

/// Run the CLI against the current working directory, writing the index to stdout.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let dir = env::current_dir().context("Failed to determine current directory")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run::run(args, &dir, &mut out)
}
