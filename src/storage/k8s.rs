//! Conversions into `k8s_openapi` core/v1 types
//!
//! Pod spec builders working with the typed API structs can take composed
//! lists directly. Conversion goes through the shared JSON layout, which
//! keeps it independent of the selected Kubernetes API version.

use crate::storage::{Volume, VolumeMount};
use k8s_openapi::api::core::v1;

impl Volume {
    /// Convert into the typed pod spec volume
    pub fn to_k8s(&self) -> Result<v1::Volume, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

impl VolumeMount {
    /// Convert into the typed container volume mount
    pub fn to_k8s(&self) -> Result<v1::VolumeMount, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

/// Convert a composed volume list, keeping its order
pub fn to_k8s_volumes(volumes: &[Volume]) -> Result<Vec<v1::Volume>, serde_json::Error> {
    volumes.iter().map(Volume::to_k8s).collect()
}

/// Convert a composed mount list, keeping its order
pub fn to_k8s_volume_mounts(
    mounts: &[VolumeMount],
) -> Result<Vec<v1::VolumeMount>, serde_json::Error> {
    mounts.iter().map(VolumeMount::to_k8s).collect()
}
