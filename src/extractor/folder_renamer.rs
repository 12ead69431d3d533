use crate::error::{AutoXisoError, Result};
use crate::extractor::ensure_directory;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    Unchanged { path: PathBuf },
    Failed(AutoXisoError),
}

#[derive(Debug, Default)]
pub struct RenameSummary {
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameSummary {
    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AutoXisoError> {
        self.outcomes.iter().filter_map(|o| match o {
            RenameOutcome::Failed(e) => Some(e),
            _ => None,
        })
    }
}

/// Strips extensions from the folders extract-xiso leaves in the output
/// directory, e.g. `Game.iso/` becomes `Game/`.
pub struct FolderRenamer {
    output_dir: PathBuf,
}

impl FolderRenamer {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Creates the output directory when absent and lists its immediate
    /// subdirectories in name order.
    pub fn list_folders(&self) -> Result<Vec<PathBuf>> {
        ensure_directory(&self.output_dir)?;

        let mut folders = Vec::new();
        for entry in fs::read_dir(&self.output_dir).map_err(|source| AutoXisoError::PathMissing {
            path: self.output_dir.clone(),
            source,
        })? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                folders.push(entry.path());
            }
        }

        folders.sort();
        Ok(folders)
    }

    pub fn rename_all(&self, folders: &[PathBuf]) -> RenameSummary {
        let outcomes = folders.iter().map(|folder| self.rename_folder(folder)).collect();
        RenameSummary { outcomes }
    }

    fn rename_folder(&self, folder: &Path) -> RenameOutcome {
        let Some(name) = folder.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return RenameOutcome::Unchanged {
                path: folder.to_path_buf(),
            };
        };

        let Some(new_name) = truncated_name(&name) else {
            return RenameOutcome::Unchanged {
                path: folder.to_path_buf(),
            };
        };

        let parent = folder.parent().unwrap_or(self.output_dir.as_path());
        let target = parent.join(new_name);

        // fs::rename silently replaces an empty directory on Unix
        if new_name.is_empty() || target.exists() {
            return RenameOutcome::Failed(AutoXisoError::RenameConflict {
                from: folder.to_path_buf(),
                to: target,
            });
        }

        match fs::rename(folder, &target) {
            Ok(()) => {
                tracing::info!(from = %folder.display(), to = %target.display(), "renamed folder");
                RenameOutcome::Renamed {
                    from: folder.to_path_buf(),
                    to: target,
                }
            }
            Err(source) => RenameOutcome::Failed(AutoXisoError::Rename {
                from: folder.to_path_buf(),
                to: target,
                source,
            }),
        }
    }
}

/// Name cut at the first `.`, or `None` when there is nothing to cut.
pub fn truncated_name(name: &str) -> Option<&str> {
    name.find('.').map(|idx| &name[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_truncated_name() {
        assert_eq!(truncated_name("Game.iso"), Some("Game"));
        assert_eq!(truncated_name("Game.part1.iso"), Some("Game"));
        assert_eq!(truncated_name("NoDot"), None);
        assert_eq!(truncated_name(".hidden"), Some(""));
    }

    #[test]
    fn test_list_folders_creates_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");

        let renamer = FolderRenamer::new(&output);
        let folders = renamer.list_folders().unwrap();

        assert!(folders.is_empty());
        assert!(output.is_dir());
    }

    #[test]
    fn test_list_folders_skips_files() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path();
        fs::create_dir(output.join("b.iso")).unwrap();
        fs::create_dir(output.join("a")).unwrap();
        fs::write(output.join("c.iso"), b"").unwrap();

        let folders = FolderRenamer::new(output).list_folders().unwrap();
        assert_eq!(folders, vec![output.join("a"), output.join("b.iso")]);
    }

    #[test]
    fn test_rename_strips_extension() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path();
        fs::create_dir(output.join("Game.iso")).unwrap();
        fs::create_dir(output.join("NoDot")).unwrap();

        let renamer = FolderRenamer::new(output);
        let folders = renamer.list_folders().unwrap();
        let summary = renamer.rename_all(&folders);

        assert_eq!(summary.renamed_count(), 1);
        assert!(output.join("Game").is_dir());
        assert!(!output.join("Game.iso").exists());
        assert!(output.join("NoDot").is_dir());
        assert_eq!(summary.failures().count(), 0);
    }

    #[test]
    fn test_conflict_does_not_stop_remaining_renames() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path();
        fs::create_dir(output.join("Alpha")).unwrap();
        fs::create_dir(output.join("Alpha.iso")).unwrap();
        fs::create_dir(output.join("Beta.xiso")).unwrap();

        let renamer = FolderRenamer::new(output);
        let folders = renamer.list_folders().unwrap();
        let summary = renamer.rename_all(&folders);

        assert_eq!(summary.renamed_count(), 1);
        assert!(output.join("Alpha.iso").is_dir(), "conflicting folder is left in place");
        assert!(output.join("Beta").is_dir());

        let failures: Vec<_> = summary.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], AutoXisoError::RenameConflict { .. }));
    }

    #[test]
    fn test_vanished_folder_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path();
        let renamer = FolderRenamer::new(output);

        let summary = renamer.rename_all(&[output.join("Gone.iso")]);

        assert_eq!(summary.renamed_count(), 0);
        assert!(matches!(
            summary.failures().next(),
            Some(AutoXisoError::Rename { .. })
        ));
    }
}
