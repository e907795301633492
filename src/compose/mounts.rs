//! Base mounts for the init and runtime container phases
//!
//! Init containers read the raw config and write the merged result.
//! Runtime containers only see the merged result plus the data directory,
//! so they can never pick up unmerged configuration.

use crate::storage::{names, paths, VolumeMount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container lifecycle phase a mount list is composed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountPhase {
    /// Init containers assembling the merged configuration
    Init,
    /// Main service containers
    Runtime,
}

impl MountPhase {
    /// Base mounts for this phase
    pub fn base_mounts(&self) -> Vec<VolumeMount> {
        match self {
            Self::Init => init_base_mounts(),
            Self::Runtime => runtime_base_mounts(),
        }
    }
}

impl fmt::Display for MountPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

/// scripts (ro), config-data (ro), config-data-merged (rw)
pub fn init_base_mounts() -> Vec<VolumeMount> {
    vec![
        VolumeMount::read_only(names::SCRIPTS, paths::SCRIPTS),
        VolumeMount::read_only(names::CONFIG_DATA, paths::CONFIG_DEFAULT),
        VolumeMount::writable(names::CONFIG_DATA_MERGED, paths::CONFIG_MERGED),
    ]
}

/// scripts (ro), config-data-merged (rw), lib-data (rw)
pub fn runtime_base_mounts() -> Vec<VolumeMount> {
    vec![
        VolumeMount::read_only(names::SCRIPTS, paths::SCRIPTS),
        VolumeMount::writable(names::CONFIG_DATA_MERGED, paths::CONFIG_MERGED),
        VolumeMount::writable(names::LIB_DATA, paths::DATA),
    ]
}
