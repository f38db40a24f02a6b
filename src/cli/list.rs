//! List command implementation.
//!
//! Prints `index<TAB>name<TAB>geometry` for every slot to stdout.

use std::io::{self, Write};

use clap::Args;

use crate::config::Config;
use crate::error::{Result, SplitError};
use crate::output::{plural, Printer};
use crate::slot::slots;

use super::GlobalArgs;

/// Print every slot with its source rectangle
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print only slot names
    #[arg(long)]
    pub names_only: bool,
}

pub fn run(args: ListArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let config = global.resolve()?;

    let mut stdout = io::stdout().lock();
    write_listing(&config, args.names_only, &mut stdout).map_err(|e| SplitError::Io {
        path: "<stdout>".into(),
        message: e.to_string(),
    })?;

    printer.info("Listed", &plural(config.names.len(), "slot", "slots"));
    Ok(())
}

fn write_listing(config: &Config, names_only: bool, out: &mut impl Write) -> io::Result<()> {
    for slot in slots(&config.names, config.tile_size) {
        if names_only {
            writeln!(out, "{}", slot.name)?;
        } else {
            writeln!(out, "{}\t{}\t{}", slot.index, slot.name, slot.rect)?;
        }
    }
    Ok(())
}
