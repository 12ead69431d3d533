use crate::catalog::rom_filter::RomFilter;
use crate::error::{AutoXisoError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomEntry {
    pub display_name: String,
    pub source_path: PathBuf,
}

impl RomEntry {
    pub fn new(source_path: PathBuf) -> Self {
        let filename = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            display_name: strip_all_extensions(&filename).to_string(),
            source_path,
        }
    }
}

/// Result of a single scan. `created_dir` is set when the input directory
/// had to be created, in which case `entries` is always empty.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub entries: Vec<RomEntry>,
    pub created_dir: Option<PathBuf>,
}

impl ScanOutcome {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct RomScanner {
    filter: RomFilter,
}

impl RomScanner {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            filter: RomFilter::new(extensions),
        }
    }

    /// Lists matching files directly inside `input_dir`, sorted by display
    /// name. A missing directory is created and yields an empty outcome.
    pub fn scan<P: AsRef<Path>>(&self, input_dir: P) -> Result<ScanOutcome> {
        let input_dir = input_dir.as_ref();

        if !input_dir.exists() {
            fs::create_dir_all(input_dir).map_err(|source| AutoXisoError::PathMissing {
                path: input_dir.to_path_buf(),
                source,
            })?;

            let created = fs::canonicalize(input_dir).unwrap_or_else(|_| input_dir.to_path_buf());
            tracing::info!(path = %created.display(), "created input directory");

            return Ok(ScanOutcome {
                entries: Vec::new(),
                created_dir: Some(created),
            });
        }

        if !input_dir.is_dir() {
            return Err(AutoXisoError::PathMissing {
                path: input_dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a directory",
                ),
            });
        }

        let mut entries = Vec::new();

        let walker = WalkDir::new(input_dir).min_depth(1).max_depth(1);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        return Err(AutoXisoError::PathMissing {
                            path: input_dir.to_path_buf(),
                            source: err.into(),
                        });
                    }
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && self.filter.is_disc_image(path) {
                entries.push(RomEntry::new(path.to_path_buf()));
            }
        }

        entries.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.source_path.cmp(&b.source_path))
        });

        tracing::debug!(
            path = %input_dir.display(),
            count = entries.len(),
            extensions = ?self.filter.get_extensions(),
            "scan finished"
        );

        Ok(ScanOutcome {
            entries,
            created_dir: None,
        })
    }
}

/// Truncates at the first `.` until none is left, so every suffix goes:
/// `"game.part1.iso"` becomes `"game"`.
pub fn strip_all_extensions(name: &str) -> &str {
    let mut stripped = name;
    while let Some(idx) = stripped.find('.') {
        stripped = &stripped[..idx];
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scanner() -> RomScanner {
        RomScanner::new(&["iso", "xiso"])
    }

    fn names(outcome: &ScanOutcome) -> Vec<&str> {
        outcome
            .entries
            .iter()
            .map(|e| e.display_name.as_str())
            .collect()
    }

    #[test]
    fn test_strip_all_extensions() {
        assert_eq!(strip_all_extensions("a.b.c.iso"), "a");
        assert_eq!(strip_all_extensions("game.part1.iso"), "game");
        assert_eq!(strip_all_extensions("Area 51.iso"), "Area 51");
        assert_eq!(strip_all_extensions("Tom & Jerry v1.1.iso"), "Tom & Jerry v1");
        assert_eq!(strip_all_extensions("NoDot"), "NoDot");
        assert_eq!(strip_all_extensions(".hidden.iso"), "");
    }

    #[test]
    fn test_entry_display_name() {
        let entry = RomEntry::new(PathBuf::from("input/Halo 2.disc1.xiso"));
        assert_eq!(entry.display_name, "Halo 2");
        assert_eq!(entry.source_path, PathBuf::from("input/Halo 2.disc1.xiso"));
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("x.iso"), b"").unwrap();
        fs::write(root.join("y.xiso"), b"").unwrap();
        fs::write(root.join("z.txt"), b"").unwrap();

        let outcome = scanner().scan(root).unwrap();

        assert_eq!(names(&outcome), vec!["x", "y"]);
        assert!(outcome.created_dir.is_none());
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("deep.iso"), b"").unwrap();
        fs::create_dir(root.join("folder.iso")).unwrap();
        fs::write(root.join("top.ISO"), b"").unwrap();

        let outcome = scanner().scan(root).unwrap();
        assert_eq!(names(&outcome), vec!["top"]);
    }

    #[test]
    fn test_scan_sorted_and_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["delta.iso", "Alpha.iso", "charlie.xiso", "bravo.part1.iso"] {
            fs::write(root.join(name), b"").unwrap();
        }

        let first = scanner().scan(root).unwrap();
        let second = scanner().scan(root).unwrap();

        assert_eq!(names(&first), vec!["Alpha", "bravo", "charlie", "delta"]);
        assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn test_scan_duplicate_names_ordered_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("game.xiso"), b"").unwrap();
        fs::write(root.join("game.iso"), b"").unwrap();

        let outcome = scanner().scan(root).unwrap();
        assert_eq!(names(&outcome), vec!["game", "game"]);
        assert!(outcome.entries[0].source_path.ends_with("game.iso"));
        assert!(outcome.entries[1].source_path.ends_with("game.xiso"));
    }

    #[test]
    fn test_scan_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input");

        let outcome = scanner().scan(&input).unwrap();

        assert!(outcome.is_empty());
        assert!(outcome.created_dir.is_some());
        assert!(input.is_dir());
    }

    #[test]
    fn test_scan_rejects_file_as_directory() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("input");
        fs::write(&not_a_dir, b"").unwrap();

        let result = scanner().scan(&not_a_dir);
        assert!(matches!(result, Err(AutoXisoError::PathMissing { .. })));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = scanner().scan(temp_dir.path()).unwrap();
        assert!(outcome.is_empty());
        assert!(outcome.created_dir.is_none());
    }
}
