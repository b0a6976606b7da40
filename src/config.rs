//! Configuration file support for sv-ifgen.
//!
//! Provides YAML-based configuration through `sv-ifgen.config.yml` files,
//! including data structures, file loading, and validation. Every field is
//! optional; present fields override the built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::interface_generation::domain::InterfaceConfig;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sv-ifgen.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub modifiers: Option<ModifiersSection>,
    pub blocks: Option<BlocksSection>,
    pub skews: Option<SkewsSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Direction suffixes appended to port identifiers.
#[derive(Debug, Deserialize, Default)]
pub struct ModifiersSection {
    pub enabled: Option<bool>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub inout: Option<String>,
}

/// Modport and clocking block names. An empty string disables the block.
#[derive(Debug, Deserialize, Default)]
pub struct BlocksSection {
    pub sync_master: Option<String>,
    pub master_clocking: Option<String>,
    pub sync_slave: Option<String>,
    pub slave_clocking: Option<String>,
    pub async_master: Option<String>,
    pub async_slave: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SkewsSection {
    pub master_input: Option<String>,
    pub master_output: Option<String>,
    pub slave_input: Option<String>,
    pub slave_output: Option<String>,
}

impl ConfigFile {
    /// Overlays the fields present in the file onto `base`.
    pub fn apply_to(&self, base: InterfaceConfig) -> InterfaceConfig {
        let mut config = base;

        if let Some(modifiers) = &self.modifiers {
            override_with(&mut config.modifiers.enabled, &modifiers.enabled);
            override_with(&mut config.modifiers.input, &modifiers.input);
            override_with(&mut config.modifiers.output, &modifiers.output);
            override_with(&mut config.modifiers.inout, &modifiers.inout);
        }

        if let Some(blocks) = &self.blocks {
            override_with(&mut config.blocks.sync_master, &blocks.sync_master);
            override_with(&mut config.blocks.master_clocking, &blocks.master_clocking);
            override_with(&mut config.blocks.sync_slave, &blocks.sync_slave);
            override_with(&mut config.blocks.slave_clocking, &blocks.slave_clocking);
            override_with(&mut config.blocks.async_master, &blocks.async_master);
            override_with(&mut config.blocks.async_slave, &blocks.async_slave);
        }

        if let Some(skews) = &self.skews {
            override_with(&mut config.skews.master.input, &skews.master_input);
            override_with(&mut config.skews.master.output, &skews.master_output);
            override_with(&mut config.skews.slave.input, &skews.slave_input);
            override_with(&mut config.skews.slave.output, &skews.slave_output);
        }

        config
    }
}

fn override_with<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null; treat it as "no overrides"
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

/// Resolves the starting configuration: defaults overlaid with the explicit
/// file if given, otherwise with a file discovered in `dir`.
pub fn resolve_base_config(explicit: Option<&Path>, dir: &Path) -> Result<InterfaceConfig> {
    let file = match explicit {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(dir)?,
    };

    let config = match file {
        Some(file) => file.apply_to(InterfaceConfig::default()),
        None => InterfaceConfig::default(),
    };
    config.validate_settings()?;
    Ok(config)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config
        .apply_to(InterfaceConfig::default())
        .validate_settings()
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
