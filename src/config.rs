//! Configuration file support for collection-sbom.
//!
//! Provides YAML-based configuration through `collection-sbom.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use collection_sbom::adapters::outbound::network::Region;
use collection_sbom::shared::error::SbomError;
use collection_sbom::shared::security::read_regular_file;
use collection_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "collection-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub region: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub credentials_warning_days: Option<i64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured region, if any. Only valid after `validate_config`.
    pub fn region(&self) -> Option<Region> {
        self.region.as_deref().and_then(|r| r.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref region) = config.region {
        region
            .parse::<Region>()
            .map_err(|details| SbomError::ConfigError { details })?;
    }

    if let Some(days) = config.credentials_warning_days {
        if days < 0 {
            return Err(SbomError::ConfigError {
                details: format!(
                    "credentials_warning_days must not be negative (got {}).\n\n\
                     💡 Hint: Use 0 to disable the credentials expiration warning.",
                    days
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
