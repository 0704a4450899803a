use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::HeaderRules;

pub const CONFIG_FILE_NAME: &str = ".tocgenrc.json";

/// Characters that would turn the extension into something other than a
/// literal `*.<ext>` match.
const FORBIDDEN_EXTENSION_CHARS: &[char] = &['*', '?', '[', ']', '/', '\\'];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_marker")]
    pub marker: char,
    #[serde(default = "default_stop_keyword")]
    pub stop_keyword: String,
    #[serde(default = "default_banner")]
    pub banner: String,
    #[serde(default = "default_sort")]
    pub sort: bool,
    #[serde(default)]
    pub skip_unreadable: bool,
}

fn default_extension() -> String {
    "m".to_string()
}

fn default_marker() -> char {
    '%'
}

fn default_stop_keyword() -> String {
    "SYNOPSIS".to_string()
}

fn default_banner() -> String {
    "%CVPR Toolbox (Computer Vision and Pattern Recognition Toolbox)".to_string()
}

fn default_sort() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            marker: default_marker(),
            stop_keyword: default_stop_keyword(),
            banner: default_banner(),
            sort: default_sort(),
            skip_unreadable: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The extension must be a plain, non-empty suffix; the marker must be visible;
    /// the stop-keyword must be non-empty so it cannot match every line.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            bail!("Invalid 'extension': must not be empty");
        }
        if let Some(c) = self
            .extension
            .chars()
            .find(|c| FORBIDDEN_EXTENSION_CHARS.contains(c) || c.is_whitespace())
        {
            bail!(
                "Invalid 'extension': \"{}\" contains forbidden character '{}'",
                self.extension,
                c
            );
        }
        if self.extension.starts_with('.') {
            bail!(
                "Invalid 'extension': \"{}\" should not start with '.'",
                self.extension
            );
        }
        if self.marker.is_whitespace() || self.marker.is_control() {
            bail!("Invalid 'marker': must be a visible character");
        }
        if self.stop_keyword.is_empty() {
            bail!("Invalid 'stopKeyword': must not be empty");
        }
        Ok(())
    }

    pub fn header_rules(&self) -> HeaderRules {
        HeaderRules::new(self.marker, &self.stop_keyword)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Look for the config file in `dir` itself. Parent directories are never searched.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    config_path.is_file().then_some(config_path)
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when defaults are used.
    pub path: Option<PathBuf>,
}

pub fn load_config(dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
