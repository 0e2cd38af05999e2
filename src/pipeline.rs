//! Generation pipeline - manifests in, output files out
//!
//! The generator modules are pure; this is the only place that reads model
//! manifests and writes generated files.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::generator::{self, GeneratorContext, Notation};
use crate::models::ModelObject;
use crate::parser::load_manifest;
use crate::scanner::Scanner;

/// Outcome of persisting one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// What happened to a configured output target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub path: PathBuf,
    pub notation: Notation,
    pub status: WriteStatus,
}

/// Runs scanning, generation and persistence for a configuration
#[derive(Debug, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Pipeline
    }

    /// Run the whole pipeline and report per-target results in config order
    pub fn run(&self, config: &Config) -> Result<Vec<TargetReport>> {
        let objects = self.load_model(config)?;
        let ctx = GeneratorContext::new(config.naming.clone());

        let mut reports = Vec::with_capacity(config.output.targets.len());
        for target in &config.output.targets {
            let notation = Notation::from_path(target);
            debug!("Generating {} for {}", notation, target.display());

            let content = generator::generate(&objects, notation, &ctx);
            let status = write_output(target, &content, config.output.skip_unchanged)?;

            match status {
                WriteStatus::Written => info!("Wrote {}", target.display()),
                WriteStatus::Unchanged => info!("Unchanged {}", target.display()),
            }

            reports.push(TargetReport {
                path: target.clone(),
                notation,
                status,
            });
        }

        Ok(reports)
    }

    /// Load every manifest under the model directory, objects in file then declaration order
    pub fn load_model(&self, config: &Config) -> Result<Vec<ModelObject>> {
        let scanner = Scanner::new(config.input.model_dir.clone(), config.input.exclude.clone());
        let manifests = scanner.scan()?;

        if manifests.is_empty() {
            warn!(
                "No model manifests found in {}",
                config.input.model_dir.display()
            );
        }

        let mut objects = Vec::new();
        for manifest in &manifests {
            let loaded = load_manifest(manifest)?;
            debug!("Loaded {} object(s) from {}", loaded.len(), manifest.display());
            objects.extend(loaded);
        }

        warn_duplicate_names(&objects);
        info!(
            "Loaded {} object(s) from {} manifest(s)",
            objects.len(),
            manifests.len()
        );

        Ok(objects)
    }
}

/// Write generated content, optionally skipping files whose content is already current
pub fn write_output(path: &Path, content: &str, skip_unchanged: bool) -> Result<WriteStatus> {
    if skip_unchanged && path.exists() {
        let current = fs::read(path)
            .with_context(|| format!("Failed to read existing output: {}", path.display()))?;
        if current == content.as_bytes() {
            return Ok(WriteStatus::Unchanged);
        }
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(WriteStatus::Written)
}

fn warn_duplicate_names(objects: &[ModelObject]) {
    let mut seen = HashSet::new();
    for object in objects {
        if !seen.insert(object.name.as_str()) {
            warn!(
                "Object name '{}' is declared more than once ({})",
                object.name, object.full_name
            );
        }
    }
}
