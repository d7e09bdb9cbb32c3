//! Host configuration schema and YAML loading
//!
//! Default location: `<config dir>/patchbay/patchbay.yaml`
//! (e.g. `~/.config/patchbay/patchbay.yaml` on Linux).

use anyhow::{Context, Result};
use patchbay_core::DEFAULT_PATCHBAY_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host-side settings for the patchbay handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Path prefix slots are published under (`{prefix}/chan_1`, ...)
    pub patchbay_prefix: String,

    /// Host key holding the currently selected preset identifier
    pub preset_key: String,

    /// File backing the standalone YAML host store
    pub state_path: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            patchbay_prefix: DEFAULT_PATCHBAY_PREFIX.to_string(),
            preset_key: "layout_preset".to_string(),
            state_path: default_state_path(),
        }
    }
}

/// Base directory for patchbay files
///
/// Returns: `<config dir>/patchbay`, falling back to `./patchbay`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("patchbay")
}

/// Default config file path: `<config dir>/patchbay/patchbay.yaml`
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("patchbay.yaml")
}

/// Default host store path: `<config dir>/patchbay/state.yaml`
pub fn default_state_path() -> PathBuf {
    default_config_dir().join("state.yaml")
}

/// Load the host config, falling back to defaults
///
/// A missing file yields defaults; an unreadable or malformed file is
/// logged as a warning and also yields defaults.
pub fn load_host_config(path: &Path) -> HostConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("patchbay config: {:?} not found, using defaults", path);
            return HostConfig::default();
        }
        Err(e) => {
            log::warn!("patchbay config: cannot read {:?}: {}, using defaults", path, e);
            return HostConfig::default();
        }
    };

    match serde_yaml::from_str::<HostConfig>(&contents) {
        Ok(config) => {
            log::info!(
                "patchbay config: prefix '{}', preset key '{}', store {:?}",
                config.patchbay_prefix,
                config.preset_key,
                config.state_path
            );
            config
        }
        Err(e) => {
            log::warn!("patchbay config: invalid {:?}: {}, using defaults", path, e);
            HostConfig::default()
        }
    }
}

/// Write the host config as YAML, creating parent directories
pub fn save_host_config(config: &HostConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("serializing patchbay config")?;
    std::fs::write(path, yaml).with_context(|| format!("writing patchbay config {:?}", path))?;

    log::info!("patchbay config: wrote {:?}", path);
    Ok(())
}

/// Load the host config, writing defaults to `path` on first run
///
/// Failing to write the default file is logged, not fatal.
pub fn load_or_init_host_config(path: &Path) -> HostConfig {
    if path.exists() {
        return load_host_config(path);
    }

    let config = HostConfig::default();
    if let Err(e) = save_host_config(&config, path) {
        log::warn!("patchbay config: could not write defaults: {:#}", e);
    }
    config
}
