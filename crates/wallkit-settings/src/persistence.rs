//! Settings Persistence
//!
//! Locates the designer configuration file in the platform config directory
//! and loads or saves it. A missing file is not an error: the defaults are
//! used until the first save.

use crate::config::DesignerConfig;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "wallkit";
const CONFIG_FILE: &str = "designer.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    config: DesignerConfig,
}

impl SettingsPersistence {
    /// `<config dir>/wallkit/designer.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Open the settings at `path`, falling back to defaults when the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let config = if path.exists() {
            info!("Loading designer settings from {}", path.display());
            DesignerConfig::load_from_file(&path)?
        } else {
            debug!("No settings at {}, using defaults", path.display());
            DesignerConfig::default()
        };
        Ok(Self { path, config })
    }

    /// Open the settings at the platform default location.
    pub fn open_default() -> SettingsResult<Self> {
        Self::open(Self::default_path()?)
    }

    /// Save settings, creating the parent directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Saved designer settings to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut DesignerConfig {
        &mut self.config
    }

    pub fn into_config(self) -> DesignerConfig {
        self.config
    }
}
