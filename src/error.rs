use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Reasons the environment cannot support a run.
#[derive(Error, Diagnostic, Debug)]
pub enum EnvironmentError {
    #[error("Image tool not found: {tool} ({reason})")]
    #[diagnostic(
        code(atlas::env::tool_missing),
        help("Install ImageMagick (e.g. `brew install imagemagick`) or use `--backend native`")
    )]
    ToolMissing { tool: String, reason: String },

    #[error("Input image not found: {}", .path.display())]
    #[diagnostic(
        code(atlas::env::input_missing),
        help("Make sure the sprite sheet exists, or pass --input")
    )]
    InputMissing { path: PathBuf },
}

/// Main error type for atlas-split operations
#[derive(Error, Diagnostic, Debug)]
pub enum SplitError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Environment(#[from] EnvironmentError),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(atlas::io))]
    Io { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(atlas::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{failed} of {attempted} slot(s) failed to extract")]
    #[diagnostic(
        code(atlas::extract),
        help("Re-run without --strict to keep the partial output")
    )]
    Extraction { failed: usize, attempted: usize },
}

/// Failure of a single crop invocation.
///
/// Never aborts a batch; it is recorded against the slot name in the summary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CropError {
    #[error("failed to spawn {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("{program} exited with code {code}: {output}")]
    Exit {
        program: String,
        code: i32,
        output: String,
    },

    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },

    #[error("image error: {0}")]
    Image(String),

    #[error("output file was not produced: {}", .0.display())]
    NoOutput(PathBuf),

    #[error("could not remove previous {}: {message}", .path.display())]
    Stale { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, SplitError>;
