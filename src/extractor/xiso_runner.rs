use crate::catalog::RomEntry;
use crate::error::{AutoXisoError, Result};
use crate::extractor::ensure_directory;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

/// Receives per-image notifications while extractions run.
pub trait ExtractionObserver {
    fn on_start(&self, _entry: &RomEntry, _destination: &Path) {}
    fn on_finish(&self, _entry: &RomEntry, _result: &Result<ExitStatus>) {}
}

/// Observer that ignores every notification.
pub struct SilentObserver;

impl ExtractionObserver for SilentObserver {}

#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub succeeded: usize,
    pub total: usize,
    pub start_time: Instant,
    pub errors: Vec<String>,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            succeeded: 0,
            total,
            start_time: Instant::now(),
            errors: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn add_error<S: Into<String>>(&mut self, error: S) {
        self.errors.push(error.into());
    }

    pub fn failed(&self) -> usize {
        self.errors.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Runs the external extract-xiso binary against disc images.
pub struct XisoRunner {
    extractor: PathBuf,
    output_dir: PathBuf,
}

impl XisoRunner {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(extractor: P, output_dir: Q) -> Self {
        Self {
            extractor: extractor.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Extracts one image, blocking until the extractor exits. The child's
    /// exit status is returned but not interpreted.
    pub fn extract(&self, entry: &RomEntry, observer: &dyn ExtractionObserver) -> Result<ExitStatus> {
        observer.on_start(entry, &self.output_dir);
        let result = self.run_extractor(entry);
        observer.on_finish(entry, &result);
        result
    }

    /// Extracts every entry in order. A failure is recorded and the loop
    /// moves on to the next image.
    pub fn extract_all(&self, entries: &[RomEntry], observer: &dyn ExtractionObserver) -> BatchProgress {
        let mut progress = BatchProgress::new(entries.len());

        for entry in entries {
            match self.extract(entry, observer) {
                Ok(_) => progress.record_success(),
                Err(e) => {
                    progress.add_error(format!("{}: {}", entry.display_name, e));
                }
            }
        }

        progress
    }

    fn run_extractor(&self, entry: &RomEntry) -> Result<ExitStatus> {
        if !self.extractor.is_file() {
            return Err(AutoXisoError::ExecutableMissing {
                path: self.extractor.clone(),
            });
        }

        ensure_directory(&self.output_dir)?;

        // The child runs inside the output directory, so both paths must be
        // absolute before the working directory changes.
        let program = std::path::absolute(&self.extractor).map_err(|source| {
            AutoXisoError::ProcessLaunch {
                program: self.extractor.clone(),
                source,
            }
        })?;
        let image = std::path::absolute(&entry.source_path)?;

        tracing::info!(
            program = %program.display(),
            image = %image.display(),
            cwd = %self.output_dir.display(),
            "launching extractor"
        );

        let status = Command::new(&program)
            .arg(&image)
            .current_dir(&self.output_dir)
            .status()
            .map_err(|source| AutoXisoError::ProcessLaunch {
                program: program.clone(),
                source,
            })?;

        tracing::debug!(status = %status, image = %image.display(), "extractor exited");

        Ok(status)
    }
}
