//! CLI argument definitions using clap.
//!
//! Running `tocgen` without a subcommand generates the index for the current
//! directory. Every flag is optional and overrides the config file.

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Overrides for the generator settings.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// File extension to collect, without the dot (default: m)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Character that starts a comment line (default: %)
    #[arg(long, value_name = "CHAR")]
    pub marker: Option<char>,

    /// Comment text that ends a header block (default: SYNOPSIS)
    #[arg(long, value_name = "WORD")]
    pub stop_keyword: Option<String>,

    /// First line of the generated document
    #[arg(long, value_name = "TEXT")]
    pub banner: Option<String>,

    /// Keep directory listing order instead of sorting by file name
    #[arg(long)]
    pub unsorted: bool,

    /// Warn about unreadable files and continue instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if let Some(marker) = self.marker {
            config.marker = marker;
        }
        if let Some(stop_keyword) = &self.stop_keyword {
            config.stop_keyword = stop_keyword.clone();
        }
        if let Some(banner) = &self.banner {
            config.banner = banner.clone();
        }
        if self.unsorted {
            config.sort = false;
        }
        if self.skip_unreadable {
            config.skip_unreadable = true;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .tocgenrc.json configuration file
    Init,
}
