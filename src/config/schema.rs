//! Configuration schema for glance-volumes
//!
//! Global configuration lives at `~/.config/glance-volumes/config.toml`;
//! a project may override it with `.glance-volumes.toml`.

use crate::compose::MountPhase;
use crate::error::{GlanceVolumesError, GlanceVolumesResult};
use crate::storage::{ExtraVolMounts, PropagationType, GLANCE_API_PROPAGATION};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service instance being composed
    pub instance: InstanceConfig,

    /// Scopes requested by each composition context
    pub propagation: PropagationConfig,

    /// User-supplied extra volumes
    pub extra_mounts: Vec<ExtraVolMounts>,
}

impl Config {
    /// Reject configurations composition cannot work with
    pub fn validate(&self) -> GlanceVolumesResult<()> {
        if self.instance.name.trim().is_empty() {
            return Err(GlanceVolumesError::InstanceNameMissing);
        }
        if self.instance.pvc_name.trim().is_empty() {
            return Err(GlanceVolumesError::User(
                "Persistent volume claim name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Service instance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Instance name, prefixes the scripts and config-data config maps
    pub name: String,

    /// Claim backing the image store
    pub pvc_name: String,

    /// Secrets projected into every container
    pub secrets: Vec<String>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            name: "glance".to_string(),
            pvc_name: "glance".to_string(),
            secrets: vec![],
        }
    }
}

/// Propagation scopes per composition context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Scopes for the pod volume list
    pub volumes: Vec<PropagationType>,

    /// Scopes for init container mounts
    pub init: Vec<PropagationType>,

    /// Scopes for service container mounts
    pub runtime: Vec<PropagationType>,
}

impl PropagationConfig {
    /// Scopes configured for the mounts of a phase
    pub fn for_phase(&self, phase: MountPhase) -> &[PropagationType] {
        match phase {
            MountPhase::Init => &self.init,
            MountPhase::Runtime => &self.runtime,
        }
    }
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            volumes: GLANCE_API_PROPAGATION.to_vec(),
            init: GLANCE_API_PROPAGATION.to_vec(),
            runtime: GLANCE_API_PROPAGATION.to_vec(),
        }
    }
}
