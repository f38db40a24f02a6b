//! Split command implementation.
//!
//! Runs the whole pipeline: check the environment, crop every slot, write
//! the stylesheet.

use clap::Args;

use crate::crop::Backend;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::pipeline::{Pipeline, RunOptions};

use super::GlobalArgs;

/// Crop every slot and write the stylesheet
#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Crop backend
    #[arg(long, value_enum, default_value_t = Backend::Magick)]
    pub backend: Backend,

    /// Number of crops to run in parallel
    #[arg(long, short, default_value = "1")]
    pub jobs: usize,

    /// Exit with an error if any slot fails to extract
    #[arg(long)]
    pub strict: bool,

    /// Validate and print the planned crops without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: SplitArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let config = global.resolve()?;
    let cropper = args.backend.cropper(&config);

    let options = RunOptions {
        jobs: args.jobs.max(1),
        strict: args.strict,
        dry_run: args.dry_run,
    };

    let report = Pipeline::new(&config, cropper.as_ref()).run(options, printer)?;
    if args.dry_run {
        return Ok(());
    }

    let summary = &report.summary;
    if summary.is_complete() {
        printer.success("Finished", "sprite sheet split into individual images");
    } else {
        printer.warning(
            "Finished",
            &format!(
                "{} of {} slots failed; see errors above",
                summary.failures.len(),
                summary.attempted
            ),
        );
    }

    printer.info("Next", &format!("review the generated images in {}", display_path(&config.output_dir)));
    printer.info("Next", &format!("test {} in the application", display_path(&config.stylesheet)));
    printer.info("Next", &format!("delete {} if no longer needed", display_path(&config.input)));

    Ok(())
}
