use clap::Parser;
use miette::Result;
use atlas_split::cli::{Cli, Commands};
use atlas_split::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::with_verbosity(cli.global.verbosity());
    let global = &cli.global;

    match cli.command.unwrap_or_default() {
        Commands::Split(args) => atlas_split::cli::split::run(args, global, &printer)?,
        Commands::Check(args) => atlas_split::cli::check::run(args, global, &printer)?,
        Commands::List(args) => atlas_split::cli::list::run(args, global, &printer)?,
        Commands::Css(args) => atlas_split::cli::css::run(args, global, &printer)?,
        Commands::Init(args) => atlas_split::cli::init::run(args, global, &printer)?,
        Commands::Completions(args) => atlas_split::cli::completions::run(args)?,
    }

    Ok(())
}
