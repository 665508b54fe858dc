//! CLI subcommands.

pub mod batch;
pub mod classify;
pub mod config;
pub mod process;

use std::path::Path;

use quotex_core::QuotexConfig;

/// Load the config file given on the command line, or the defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<QuotexConfig> {
    match config_path {
        Some(path) => Ok(QuotexConfig::from_file(Path::new(path))?),
        None => Ok(QuotexConfig::default()),
    }
}
