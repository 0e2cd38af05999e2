use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default container name shared by both output notations
pub const DEFAULT_NAMESPACE: &str = "server";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Input configuration - where to find model manifests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory to scan for `*.toml` model manifests
    pub model_dir: PathBuf,
    /// Directory or file names to exclude from scanning
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Output configuration - which files to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output files; a `.ts` extension selects TypeScript declarations,
    /// anything else JavaScript stubs
    pub targets: Vec<PathBuf>,
    /// Leave a target untouched when its content would not change
    #[serde(default = "default_skip_unchanged")]
    pub skip_unchanged: bool,
}

/// Naming configuration for generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Name of the stub namespace object and of the declared module
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Convert property names to camelCase
    #[serde(default)]
    pub camel_case_properties: bool,
}

fn default_skip_unchanged() -> bool {
    true
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            camel_case_properties: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !self.input.model_dir.exists() {
            anyhow::bail!(
                "Model directory does not exist: {}",
                self.input.model_dir.display()
            );
        }

        if self.output.targets.is_empty() {
            anyhow::bail!("No output targets configured");
        }

        if self.naming.namespace.trim().is_empty() {
            anyhow::bail!("Namespace must not be empty");
        }

        // Ensure output directories exist or can be created
        for target in &self.output.targets {
            if let Some(parent) = target.parent() {
                if !parent.exists() && !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig {
                model_dir: PathBuf::from("models"),
                exclude: vec!["drafts".to_string()],
            },
            output: OutputConfig {
                targets: vec![
                    PathBuf::from("wwwroot/js/server.js"),
                    PathBuf::from("wwwroot/js/server.d.ts"),
                ],
                skip_unchanged: true,
            },
            naming: NamingConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
