use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for finding model manifest files in a directory
pub struct Scanner {
    /// Root directory to scan
    model_dir: PathBuf,
    /// Directory or file names to exclude
    exclude_patterns: Vec<String>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(model_dir: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Scanner {
            model_dir,
            exclude_patterns,
        }
    }

    /// Scan for all manifest files, sorted by path so runs are reproducible
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut manifests = Vec::new();

        for entry in WalkDir::new(&self.model_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e.path()))
        {
            let entry = entry.with_context(|| {
                format!("Failed to scan model directory: {}", self.model_dir.display())
            })?;
            let path = entry.path();

            if path.is_file() && self.is_manifest_file(path) {
                manifests.push(path.to_path_buf());
            }
        }

        manifests.sort();
        Ok(manifests)
    }

    /// Check if a path is a model manifest
    fn is_manifest_file(&self, path: &Path) -> bool {
        path.extension().map(|ext| ext == "toml").unwrap_or(false)
    }

    /// Check if any component below the model directory matches an exclude pattern
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.model_dir).unwrap_or(path);

        relative.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.exclude_patterns.iter().any(|pattern| name == pattern.as_str())
        })
    }
}
