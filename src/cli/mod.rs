pub mod check;
pub mod completions;
pub mod css;
pub mod init;
pub mod list;
pub mod split;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ConfigFile};
use crate::error::Result;
use crate::output::Verbosity;

/// atlas-split - Split a vertical sprite sheet into named icons and a stylesheet
#[derive(Parser, Debug)]
#[command(name = "atlas-split")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `split` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crop every slot and write the stylesheet (default)
    Split(split::SplitArgs),

    /// Check that the crop tool and input image are available
    Check(check::CheckArgs),

    /// Print every slot with its source rectangle
    List(list::ListArgs),

    /// Write only the stylesheet
    Css(css::CssArgs),

    /// Write an atlas.yaml with the effective configuration
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Split(split::SplitArgs::default())
    }
}

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// YAML file overriding the built-in configuration
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Sprite sheet to split
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Directory receiving one PNG per slot
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Stylesheet file to write
    #[arg(long, global = true)]
    pub stylesheet: Option<PathBuf>,

    /// URL prefix for images in the stylesheet
    #[arg(long, global = true)]
    pub public_base: Option<String>,

    /// Tile edge length in pixels
    #[arg(long, global = true)]
    pub tile_size: Option<u32>,

    /// ImageMagick program name or path
    #[arg(long, global = true)]
    pub tool: Option<String>,

    /// Only print warnings and errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print one line per slot
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Layer defaults, the optional config file, then flags.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigFile::load(path)?.apply(Config::default()),
            None => Config::default(),
        };

        let flags = ConfigFile {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            stylesheet: self.stylesheet.clone(),
            public_base: self.public_base.clone(),
            tile_size: self.tile_size,
            tool: self.tool.clone(),
            ..Default::default()
        };
        config = flags.apply(config);

        config.validate()?;
        Ok(config)
    }
}
