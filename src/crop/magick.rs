//! ImageMagick backend.
//!
//! Runs `magick <input> -crop WxH+X+Y +repage <output>` once per slot.
//! `+repage` drops the virtual canvas offset left behind by `-crop`, so the
//! written PNG is exactly `W x H` with its origin at (0,0).

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{CropError, EnvironmentError};
use crate::slot::Rect;

use super::Cropper;

/// Bound on the `--version` probe.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Bound on a single crop invocation.
pub const CROP_TIMEOUT_SECS: u64 = 10;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Crops by invoking an ImageMagick binary.
pub struct MagickCropper {
    program: String,
    probe_timeout_secs: u64,
    crop_timeout_secs: u64,
}

impl MagickCropper {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            probe_timeout_secs: PROBE_TIMEOUT_SECS,
            crop_timeout_secs: CROP_TIMEOUT_SECS,
        }
    }

    /// Override the per-crop timeout.
    pub fn with_crop_timeout(mut self, secs: u64) -> Self {
        self.crop_timeout_secs = secs;
        self
    }

    /// Arguments for one crop, excluding the program itself.
    pub fn crop_args(input: &Path, rect: Rect, output: &Path) -> Vec<String> {
        vec![
            input.display().to_string(),
            "-crop".to_string(),
            rect.geometry(),
            "+repage".to_string(),
            output.display().to_string(),
        ]
    }

    fn resolve(&self) -> Result<PathBuf, EnvironmentError> {
        which::which(&self.program).map_err(|e| EnvironmentError::ToolMissing {
            tool: self.program.clone(),
            reason: e.to_string(),
        })
    }

    /// Run a command with a timeout, returning stdout.
    ///
    /// Both pipes are drained on reader threads while the child runs, so a
    /// chatty tool cannot stall on a full pipe buffer.
    fn run_command(&self, program: &Path, args: &[String], timeout_secs: u64) -> Result<String, CropError> {
        let label = self.program.clone();
        let timeout = Duration::from_secs(timeout_secs);
        let start = Instant::now();

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CropError::Spawn {
                program: label.clone(),
                message: e.to_string(),
            })?;

        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if start.elapsed() > timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = join_reader(stdout);
                        let _ = join_reader(stderr);
                        return Err(CropError::Timeout {
                            program: label,
                            secs: timeout_secs,
                        });
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CropError::Spawn {
                        program: label,
                        message: format!("failed to check status: {}", e),
                    });
                }
            }
        };

        finish(&label, status, join_reader(stdout), join_reader(stderr))
    }
}

fn finish(program: &str, status: ExitStatus, stdout: String, stderr: String) -> Result<String, CropError> {
    if !status.success() {
        let output = if stderr.trim().is_empty() { stdout } else { stderr };
        return Err(CropError::Exit {
            program: program.to_string(),
            code: status.code().unwrap_or(-1),
            output: output.trim().to_string(),
        });
    }

    Ok(stdout)
}

fn spawn_reader<R: Read + Send + 'static>(stream: Option<R>) -> Option<JoinHandle<String>> {
    stream.map(|mut s| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = s.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

impl Cropper for MagickCropper {
    fn name(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> Result<String, EnvironmentError> {
        let path = self.resolve()?;
        let stdout = self
            .run_command(&path, &["--version".to_string()], self.probe_timeout_secs)
            .map_err(|e| EnvironmentError::ToolMissing {
                tool: self.program.clone(),
                reason: e.to_string(),
            })?;

        Ok(stdout
            .lines()
            .next()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| path.display().to_string()))
    }

    fn crop(&self, input: &Path, rect: Rect, output: &Path) -> Result<(), CropError> {
        let args = Self::crop_args(input, rect, output);
        self.run_command(Path::new(&self.program), &args, self.crop_timeout_secs)?;
        Ok(())
    }
}
