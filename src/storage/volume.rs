//! Kubernetes-shaped volume and mount values
//!
//! These mirror the `core/v1` `Volume` and `VolumeMount` field layout so the
//! composed lists serialize to exactly what a pod spec expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named storage origin attachable to a pod
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume name, referenced by mounts
    pub name: String,

    /// Where the volume's content comes from
    #[serde(flatten)]
    pub source: VolumeSource,
}

impl Volume {
    /// Config-map-backed volume with the given default file mode
    pub fn config_map(name: impl Into<String>, config_map: impl Into<String>, mode: i32) -> Self {
        Self {
            name: name.into(),
            source: VolumeSource::ConfigMap(ConfigMapVolumeSource {
                name: config_map.into(),
                default_mode: Some(mode),
            }),
        }
    }

    /// Secret-backed volume with the given default file mode
    pub fn secret(name: impl Into<String>, secret_name: impl Into<String>, mode: i32) -> Self {
        Self {
            name: name.into(),
            source: VolumeSource::Secret(SecretVolumeSource {
                secret_name: secret_name.into(),
                default_mode: Some(mode),
            }),
        }
    }

    /// Scratch volume living as long as the pod, on the node's default medium
    pub fn empty_dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: VolumeSource::EmptyDir(EmptyDirVolumeSource::default()),
        }
    }

    /// Volume backed by a persistent volume claim
    pub fn persistent_claim(name: impl Into<String>, claim_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: VolumeSource::PersistentVolumeClaim(PersistentVolumeClaimVolumeSource {
                claim_name: claim_name.into(),
                read_only: None,
            }),
        }
    }

    /// Default file mode of the projected files, if the kind carries one
    pub fn default_mode(&self) -> Option<i32> {
        match &self.source {
            VolumeSource::ConfigMap(cm) => cm.default_mode,
            VolumeSource::Secret(s) => s.default_mode,
            _ => None,
        }
    }
}

/// Kind-specific volume parameters.
///
/// Serialized externally tagged and flattened into [`Volume`], giving the
/// `{"name": "...", "configMap": {...}}` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VolumeSource {
    ConfigMap(ConfigMapVolumeSource),
    Secret(SecretVolumeSource),
    EmptyDir(EmptyDirVolumeSource),
    PersistentVolumeClaim(PersistentVolumeClaimVolumeSource),
    HostPath(HostPathVolumeSource),
}

impl VolumeSource {
    /// Short kind label used in table output
    pub fn kind(&self) -> VolumeKind {
        match self {
            Self::ConfigMap(_) => VolumeKind::ConfigMap,
            Self::Secret(_) => VolumeKind::Secret,
            Self::EmptyDir(_) => VolumeKind::EmptyDir,
            Self::PersistentVolumeClaim(_) => VolumeKind::PersistentVolumeClaim,
            Self::HostPath(_) => VolumeKind::HostPath,
        }
    }

    /// Name of the backing object (config map, secret, claim, host path)
    pub fn backing_name(&self) -> Option<&str> {
        match self {
            Self::ConfigMap(cm) => Some(&cm.name),
            Self::Secret(s) => Some(&s.secret_name),
            Self::EmptyDir(_) => None,
            Self::PersistentVolumeClaim(pvc) => Some(&pvc.claim_name),
            Self::HostPath(hp) => Some(&hp.path),
        }
    }
}

/// Discriminant of a [`VolumeSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    ConfigMap,
    Secret,
    EmptyDir,
    PersistentVolumeClaim,
    HostPath,
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigMap => write!(f, "configMap"),
            Self::Secret => write!(f, "secret"),
            Self::EmptyDir => write!(f, "emptyDir"),
            Self::PersistentVolumeClaim => write!(f, "persistentVolumeClaim"),
            Self::HostPath => write!(f, "hostPath"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapVolumeSource {
    /// Name of the config map
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretVolumeSource {
    /// Name of the secret in the pod's namespace
    pub secret_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
}

/// Empty directory; an empty medium means the node's default storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyDirVolumeSource {
    #[serde(default)]
    pub medium: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaimVolumeSource {
    pub claim_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPathVolumeSource {
    pub path: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub path_type: Option<String>,
}

/// Attachment of a named volume inside a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    /// Name of the volume being mounted
    pub name: String,

    /// Absolute path within the container
    pub mount_path: String,

    /// Mounted read-only if true, read-write otherwise
    #[serde(default)]
    pub read_only: bool,

    /// Path within the volume to mount instead of its root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
}

impl VolumeMount {
    pub fn read_only(name: impl Into<String>, mount_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mount_path: mount_path.into(),
            read_only: true,
            sub_path: None,
        }
    }

    pub fn writable(name: impl Into<String>, mount_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mount_path: mount_path.into(),
            read_only: false,
            sub_path: None,
        }
    }

    /// Access label for display ("ro" / "rw")
    pub fn access(&self) -> &'static str {
        if self.read_only {
            "ro"
        } else {
            "rw"
        }
    }
}
