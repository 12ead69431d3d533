pub mod folder_renamer;
pub mod xiso_runner;

pub use folder_renamer::{FolderRenamer, RenameOutcome, RenameSummary};
pub use xiso_runner::{BatchProgress, ExtractionObserver, SilentObserver, XisoRunner};

use crate::error::{AutoXisoError, Result};
use std::path::Path;

/// Creates `dir` (and parents) when it does not exist yet.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|source| AutoXisoError::PathMissing {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %dir.display(), "created directory");
    Ok(())
}
