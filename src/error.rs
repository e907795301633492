//! Error types for glance-volumes
//!
//! The composition engine itself cannot fail; these cover configuration,
//! file access and output rendering around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for glance-volumes operations
pub type GlanceVolumesResult<T> = Result<T, GlanceVolumesError>;

/// All errors that can occur outside of composition
#[derive(Error, Debug)]
pub enum GlanceVolumesError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Instance name is empty")]
    InstanceNameMissing,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl GlanceVolumesError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound(_) => Some("Run: glance-volumes config init"),
            Self::InstanceNameMissing => Some("Set [instance] name in the configuration"),
            Self::ConfigInvalid { .. } => Some("Run: glance-volumes config show --defaults"),
            _ => None,
        }
    }
}
