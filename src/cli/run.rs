//! Command dispatch for the tocgen CLI.
//!
//! Without a subcommand the index for `dir` is written to `out`. `init`
//! writes a default config file into `dir`.

use std::{fs, io::Write, path::Path};

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command, GenerateArgs},
    exit_status::ExitStatus,
    report,
};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    core::{FileOrder, IndexOptions, ReadErrorPolicy, discover_files, write_index},
};

pub fn run<W: Write>(
    Arguments { command, generate }: Arguments,
    dir: &Path,
    out: &mut W,
) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => {
            init(dir)?;
            report::print_init_created();
            Ok(ExitStatus::Success)
        }
        None => generate_index(&generate, dir, out),
    }
}

fn generate_index<W: Write>(
    args: &GenerateArgs,
    dir: &Path,
    out: &mut W,
) -> Result<ExitStatus> {
    let loaded = load_config(dir)?;
    let mut config = loaded.config;
    args.apply_to(&mut config);
    config.validate()?;

    let order = if config.sort {
        FileOrder::ByName
    } else {
        FileOrder::Listing
    };
    let files = discover_files(dir, &config.extension, order)?;
    if args.verbose {
        report::print_discovered(files.len(), &config.extension, loaded.path.as_deref());
    }

    let options = IndexOptions {
        banner: config.banner.clone(),
        rules: config.header_rules(),
        on_read_error: if config.skip_unreadable {
            ReadErrorPolicy::Skip
        } else {
            ReadErrorPolicy::FailFast
        },
    };
    let summary = write_index(&files, &options, out)?;

    report::print_skipped(&summary.skipped);
    if args.verbose {
        report::print_summary(&summary);
    }

    Ok(ExitStatus::from_summary(&summary))
}

fn init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(())
}
