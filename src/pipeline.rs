//! The split pipeline: validate, extract, write the stylesheet.
//!
//! Stages run strictly in order. Any fatal error moves the pipeline to
//! `Stage::Failed` and stops it; a failed run is simply re-run from the start.

use crate::config::Config;
use crate::crop::Cropper;
use crate::error::{Result, SplitError};
use crate::extract::{extract, ExtractionSummary};
use crate::output::{display_path, plural, Printer};
use crate::slot::slots;
use crate::stylesheet;
use crate::validate::{validate, Environment};

/// Pipeline progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    Validated,
    Extracted,
    StylesheetWritten,
    Done,
    Failed(String),
}

/// Knobs for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Worker threads for cropping; 1 runs sequentially.
    pub jobs: usize,
    /// Treat any failed slot as a failed run.
    pub strict: bool,
    /// Validate and report the plan without writing anything.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            strict: false,
            dry_run: false,
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub environment: Environment,
    pub summary: ExtractionSummary,
    /// Stylesheet text, absent on a dry run.
    pub stylesheet: Option<String>,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    cropper: &'a dyn Cropper,
    stage: Stage,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, cropper: &'a dyn Cropper) -> Self {
        Self {
            config,
            cropper,
            stage: Stage::NotStarted,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Run every stage to completion.
    pub fn run(&mut self, options: RunOptions, printer: &Printer) -> Result<RunReport> {
        let result = self.run_stages(options, printer);
        if let Err(e) = &result {
            self.stage = Stage::Failed(e.to_string());
        }
        result
    }

    fn run_stages(&mut self, options: RunOptions, printer: &Printer) -> Result<RunReport> {
        let config = self.config;

        config.validate()?;
        let environment = validate(config, self.cropper)?;
        self.stage = Stage::Validated;
        printer.verbose("Backend", self.cropper.name());
        printer.info("Found", &environment.tool);

        if options.dry_run {
            for slot in slots(&config.names, config.tile_size) {
                printer.info(
                    "Would crop",
                    &format!("{} -> {}", slot.rect, display_path(&config.output_path(slot.name))),
                );
            }
            printer.info(
                "Would write",
                &format!(
                    "{} ({})",
                    display_path(&config.stylesheet),
                    plural(config.names.len(), "rule", "rules")
                ),
            );
            return Ok(RunReport {
                environment,
                summary: ExtractionSummary::default(),
                stylesheet: None,
            });
        }

        let summary = extract(config, self.cropper, options.jobs.max(1), printer)?;
        self.stage = Stage::Extracted;
        report_summary(config, &summary, printer);

        let text = stylesheet::generate(config)?;
        self.stage = Stage::StylesheetWritten;
        printer.success("Generated", &display_path(&config.stylesheet));
        if !summary.is_complete() {
            printer.warning(
                "Warning",
                &format!(
                    "stylesheet references {} without an extracted image",
                    plural(summary.failures.len(), "slot", "slots")
                ),
            );
        }

        if options.strict && !summary.is_complete() {
            return Err(SplitError::Extraction {
                failed: summary.failures.len(),
                attempted: summary.attempted,
            });
        }

        self.stage = Stage::Done;
        Ok(RunReport {
            environment,
            summary,
            stylesheet: Some(text),
        })
    }
}

fn report_summary(config: &Config, summary: &ExtractionSummary, printer: &Printer) {
    printer.success(
        "Extracted",
        &format!(
            "{} of {} to {}",
            summary.succeeded(),
            plural(summary.attempted, "image", "images"),
            display_path(&config.output_dir)
        ),
    );

    for failure in &summary.failures {
        printer.warning("Failed", &format!("{}: {}", failure.name, failure.error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::fake::FakeCropper;
    use crate::error::EnvironmentError;
    use crate::output::Verbosity;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::with_verbosity(Verbosity::Quiet)
    }

    fn config_in(dir: &Path, names: &[&str]) -> Config {
        let input = dir.join("sheet.png");
        fs::write(&input, b"sheet").unwrap();
        Config {
            input,
            output_dir: dir.join("out").join("icons"),
            stylesheet: dir.join("icons.css"),
            ..Config::with_names(names.iter().copied())
        }
    }

    #[test]
    fn test_full_run_reaches_done() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "b", "c"]);
        let cropper = FakeCropper::default();

        let mut pipeline = Pipeline::new(&config, &cropper);
        assert_eq!(pipeline.stage(), &Stage::NotStarted);

        let report = pipeline.run(RunOptions::default(), &quiet()).unwrap();

        assert_eq!(pipeline.stage(), &Stage::Done);
        assert_eq!(report.summary.succeeded(), 3);
        let css = report.stylesheet.unwrap();
        let a = css.find(".a {").unwrap();
        let b = css.find(".b {").unwrap();
        let c = css.find(".c {").unwrap();
        assert!(a < b && b < c);
        assert_eq!(fs::read_to_string(&config.stylesheet).unwrap(), css);
    }

    #[test]
    fn test_missing_input_leaves_no_output() {
        let dir = tempdir().unwrap();
        let config = Config {
            input: dir.path().join("absent.png"),
            ..config_in(dir.path(), &["a"])
        };
        let cropper = FakeCropper::default();

        let mut pipeline = Pipeline::new(&config, &cropper);
        let err = pipeline.run(RunOptions::default(), &quiet()).unwrap_err();

        assert!(matches!(
            err,
            SplitError::Environment(EnvironmentError::InputMissing { .. })
        ));
        assert!(matches!(pipeline.stage(), Stage::Failed(_)));
        assert!(!dir.path().join("out").exists());
        assert!(!config.stylesheet.exists());
        assert!(cropper.calls().is_empty());
    }

    #[test]
    fn test_tool_missing_leaves_no_output() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a"]);
        let cropper = FakeCropper {
            missing: true,
            ..Default::default()
        };

        let err = Pipeline::new(&config, &cropper)
            .run(RunOptions::default(), &quiet())
            .unwrap_err();

        assert!(matches!(
            err,
            SplitError::Environment(EnvironmentError::ToolMissing { .. })
        ));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_slot_failure_still_writes_stylesheet() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "b", "c"]);
        let cropper = FakeCropper::failing(&["b"]);

        let mut pipeline = Pipeline::new(&config, &cropper);
        let report = pipeline.run(RunOptions::default(), &quiet()).unwrap();

        assert_eq!(pipeline.stage(), &Stage::Done);
        assert_eq!(report.summary.failures[0].name, "b");
        // All names stay in the stylesheet, failed or not.
        assert!(report.stylesheet.unwrap().contains(".b {"));
    }

    #[test]
    fn test_strict_fails_after_writing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "b"]);
        let cropper = FakeCropper::failing(&["a"]);

        let mut pipeline = Pipeline::new(&config, &cropper);
        let options = RunOptions {
            strict: true,
            ..Default::default()
        };
        let err = pipeline.run(options, &quiet()).unwrap_err();

        assert!(matches!(
            err,
            SplitError::Extraction {
                failed: 1,
                attempted: 2
            }
        ));
        assert!(matches!(pipeline.stage(), Stage::Failed(_)));
        assert!(config.stylesheet.exists());
        assert!(config.output_dir.join("b.png").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "b"]);
        let cropper = FakeCropper::default();

        let mut pipeline = Pipeline::new(&config, &cropper);
        let options = RunOptions {
            dry_run: true,
            ..Default::default()
        };
        let report = pipeline.run(options, &quiet()).unwrap();

        assert_eq!(pipeline.stage(), &Stage::Validated);
        assert!(report.stylesheet.is_none());
        assert!(cropper.calls().is_empty());
        assert!(!config.output_dir.exists());
        assert!(!config.stylesheet.exists());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "b", "c"]);
        let cropper = FakeCropper::default();

        let first = Pipeline::new(&config, &cropper)
            .run(RunOptions::default(), &quiet())
            .unwrap();
        let second = Pipeline::new(&config, &cropper)
            .run(RunOptions::default(), &quiet())
            .unwrap();

        assert_eq!(first.stylesheet, second.stylesheet);
        assert_eq!(first.summary.outputs, second.summary.outputs);
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 3);
    }

    #[test]
    fn test_invalid_config_fails_before_probe() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "a"]);
        let cropper = FakeCropper::default();

        let err = Pipeline::new(&config, &cropper)
            .run(RunOptions::default(), &quiet())
            .unwrap_err();
        assert!(matches!(err, SplitError::Config { .. }));
        assert!(!config.output_dir.exists());
    }
}
