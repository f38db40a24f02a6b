//! Sprite extraction.
//!
//! Crops every slot of the sheet into `<output_dir>/<name>.png`. A failing
//! slot is recorded and the batch carries on; only failing to create the
//! output directory aborts.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::config::Config;
use crate::crop::Cropper;
use crate::error::{CropError, Result, SplitError};
use crate::output::{display_path, Printer};
use crate::slot::{slots, Slot};

/// Progress is reported after every this many slots.
pub const PROGRESS_EVERY: usize = 10;

/// A slot that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFailure {
    pub name: String,
    pub error: CropError,
}

/// Outcome of one extraction batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub attempted: usize,
    /// Written files, in list order.
    pub outputs: Vec<PathBuf>,
    /// Failed slots, in list order.
    pub failures: Vec<SlotFailure>,
}

impl ExtractionSummary {
    pub fn succeeded(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Extract every configured slot with `cropper`.
///
/// `jobs > 1` runs crops on a bounded worker pool. Results are gathered back
/// into list order, so the summary is identical either way.
pub fn extract(
    config: &Config,
    cropper: &dyn Cropper,
    jobs: usize,
    printer: &Printer,
) -> Result<ExtractionSummary> {
    fs::create_dir_all(&config.output_dir).map_err(|e| SplitError::Io {
        path: config.output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let total = config.names.len();
    printer.info(
        "Extracting",
        &format!("{} images from {}", total, display_path(&config.input)),
    );

    let done = AtomicUsize::new(0);
    let run = |slot: Slot<'_>| {
        let outcome = crop_slot(config, cropper, &slot);
        match &outcome {
            Ok(path) => printer.verbose(
                "Cropped",
                &format!("{} {} -> {}", slot.name, slot.rect, display_path(path)),
            ),
            Err(e) => printer.error("Error", &format!("extracting {}: {}", slot.name, e)),
        }
        let n = done.fetch_add(1, Ordering::Relaxed) + 1;
        if n % PROGRESS_EVERY == 0 {
            printer.info("Progress", &format!("{}/{}", n, total));
        }
        (slot.name.to_string(), outcome)
    };

    let outcomes: Vec<(String, std::result::Result<PathBuf, CropError>)> = if jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| SplitError::Config {
                message: format!("Failed to start {} workers: {}", jobs, e),
                help: Some("Try a smaller --jobs value".to_string()),
            })?;
        let all: Vec<Slot<'_>> = slots(&config.names, config.tile_size).collect();
        pool.install(|| all.into_par_iter().map(run).collect())
    } else {
        slots(&config.names, config.tile_size).map(run).collect()
    };

    let mut summary = ExtractionSummary {
        attempted: outcomes.len(),
        ..Default::default()
    };
    for (name, outcome) in outcomes {
        match outcome {
            Ok(path) => summary.outputs.push(path),
            Err(error) => summary.failures.push(SlotFailure { name, error }),
        }
    }

    Ok(summary)
}

/// Crop a single slot and confirm the file landed.
///
/// A file left over from an earlier run is removed first, so only this
/// crop can satisfy the check.
fn crop_slot(config: &Config, cropper: &dyn Cropper, slot: &Slot<'_>) -> std::result::Result<PathBuf, CropError> {
    let output = config.output_path(slot.name);
    match fs::remove_file(&output) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(CropError::Stale {
                path: output,
                message: e.to_string(),
            })
        }
    }

    cropper.crop(&config.input, slot.rect, &output)?;

    if !output.is_file() {
        return Err(CropError::NoOutput(output));
    }
    Ok(output)
}
