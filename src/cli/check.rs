//! Check command implementation.
//!
//! Runs only the environment checks and reports what was found.

use clap::Args;

use crate::crop::Backend;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::validate::validate;

use super::GlobalArgs;

/// Check that the crop tool and input image are available
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Crop backend to probe
    #[arg(long, value_enum, default_value_t = Backend::Magick)]
    pub backend: Backend,
}

pub fn run(args: CheckArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let config = global.resolve()?;
    let cropper = args.backend.cropper(&config);

    let env = validate(&config, cropper.as_ref())?;

    printer.info("Tool", &env.tool);
    printer.info("Input", &display_path(&config.input));
    printer.info(
        "Slots",
        &format!(
            "{} of {}x{}",
            plural(config.names.len(), "slot", "slots"),
            config.tile_size,
            config.tile_size
        ),
    );
    printer.success("Ready", "environment looks good");
    Ok(())
}
