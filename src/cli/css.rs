//! Css command implementation.
//!
//! Regenerates only the stylesheet. No images are read or written.

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::stylesheet::{self, Stylesheet};

use super::GlobalArgs;

/// Write only the stylesheet
#[derive(Args, Debug, Default)]
pub struct CssArgs {
    /// Print the stylesheet to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: CssArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let config = global.resolve()?;

    if args.stdout {
        print!("{}", Stylesheet::from_config(&config).render());
        return Ok(());
    }

    stylesheet::generate(&config)?;
    printer.success(
        "Generated",
        &format!(
            "{} ({})",
            display_path(&config.stylesheet),
            plural(config.names.len(), "rule", "rules")
        ),
    );
    Ok(())
}
