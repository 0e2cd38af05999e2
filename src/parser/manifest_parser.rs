use crate::models::ModelObject;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk layout of a model manifest: a list of `[[object]]` tables
#[derive(Debug, Default, Deserialize)]
pub struct ModelManifest {
    #[serde(default, rename = "object")]
    pub objects: Vec<ModelObject>,
}

/// Parse manifest content into model objects, in file order
pub fn parse_manifest(content: &str, source_file: &Path) -> Result<Vec<ModelObject>> {
    let manifest: ModelManifest = toml::from_str(content)
        .with_context(|| format!("Failed to parse model manifest: {}", source_file.display()))?;

    Ok(manifest.objects)
}

/// Read and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Vec<ModelObject>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model manifest: {}", path.display()))?;

    parse_manifest(&content, path)
}
