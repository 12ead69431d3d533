use crate::config::normalize_extension;
use std::path::Path;

/// Matches disc images by file extension, ignoring case.
pub struct RomFilter {
    extensions: Vec<String>,
}

impl RomFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { extensions }
    }

    pub fn is_disc_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn get_extensions(&self) -> &[String] {
        &self.extensions
    }
}
