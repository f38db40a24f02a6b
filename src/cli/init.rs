//! Init command implementation.
//!
//! Writes an `atlas.yaml` holding the effective configuration so it can be
//! edited instead of passing flags.

use std::path::PathBuf;

use clap::Args;

use crate::atomic::write_atomic;
use crate::config::{ConfigFile, CONFIG_FILENAME};
use crate::error::{Result, SplitError};
use crate::output::{display_path, plural, Printer};

use super::GlobalArgs;

/// Write an atlas.yaml with the effective configuration
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing atlas.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(SplitError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = global.resolve()?;
    let yaml = ConfigFile::from(&config).to_yaml()?;
    write_atomic(&config_path, &yaml)?;

    printer.success(
        "Created",
        &format!(
            "{} ({})",
            display_path(&config_path),
            plural(config.names.len(), "slot", "slots")
        ),
    );
    Ok(())
}
