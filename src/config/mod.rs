//! Configuration management for glance-volumes

pub mod schema;

pub use schema::{Config, InstanceConfig, PropagationConfig};

use crate::error::{GlanceVolumesError, GlanceVolumesResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File name of the project-local override
pub const LOCAL_CONFIG_FILE: &str = ".glance-volumes.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    /// Path was given explicitly, so it must exist
    explicit: bool,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            explicit: false,
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            explicit: true,
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glance-volumes")
            .join("config.toml")
    }

    /// Walk up from `start` looking for a project-local config file
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration, using defaults if the default file does not exist
    pub async fn load(&self) -> GlanceVolumesResult<Config> {
        self.load_merged(None).await
    }

    /// Load the global configuration with an optional local file on top.
    ///
    /// Tables merge key by key; any other local value replaces the global one.
    pub async fn load_merged(&self, local: Option<&Path>) -> GlanceVolumesResult<Config> {
        let mut doc = self.load_base_document().await?;
        check_document(&doc, &self.config_path)?;

        if let Some(local) = local {
            debug!("Merging local config: {}", local.display());
            let overlay = read_document(local).await?;
            check_document(&overlay, local)?;
            merge_toml(&mut doc, overlay);
        }

        doc.try_into()
            .map_err(|e: toml::de::Error| GlanceVolumesError::ConfigInvalid {
                path: local.unwrap_or(&self.config_path).to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> GlanceVolumesResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            GlanceVolumesError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    async fn load_base_document(&self) -> GlanceVolumesResult<toml::Value> {
        if !self.config_path.exists() {
            if self.explicit {
                return Err(GlanceVolumesError::ConfigNotFound(self.config_path.clone()));
            }
            debug!("Config file not found, using defaults");
            return Ok(toml::Value::Table(toml::map::Map::new()));
        }

        read_document(&self.config_path).await
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> GlanceVolumesResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| GlanceVolumesError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_document(path: &Path) -> GlanceVolumesResult<toml::Value> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| GlanceVolumesError::io(format!("reading config from {}", path.display()), e))?;

    content
        .parse()
        .map_err(|e: toml::de::Error| GlanceVolumesError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Check a single document against the schema so errors name the file they came from
fn check_document(doc: &toml::Value, path: &Path) -> GlanceVolumesResult<()> {
    doc.clone()
        .try_into::<Config>()
        .map(|_| ())
        .map_err(|e| GlanceVolumesError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Recursively overlay `overlay` onto `base`
fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
