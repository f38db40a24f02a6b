//! atlas-split - Sprite sheet splitter
//!
//! Crops a vertical strip of fixed-size tiles into one PNG per named slot and
//! generates a stylesheet binding each name to its image.

pub mod assets;
pub mod atomic;
pub mod cli;
pub mod config;
pub mod crop;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod slot;
pub mod stylesheet;
pub mod validate;

pub use config::{Config, ConfigFile, DEFAULT_TILE_SIZE};
pub use crop::{Backend, Cropper, MagickCropper, NativeCropper};
pub use error::{CropError, EnvironmentError, Result, SplitError};
pub use extract::{extract, ExtractionSummary, SlotFailure};
pub use pipeline::{Pipeline, RunOptions, RunReport, Stage};
pub use slot::{slots, Rect, Slot};
pub use stylesheet::{generate, Rule, Stylesheet};
pub use validate::{validate, Environment};
