//! Propagation-scoped extra volumes
//!
//! Operators let users attach extra volumes to a service. Each group of
//! volumes is tagged with the propagation types it applies to; a composition
//! context asks for the groups matching its own scope list.

use crate::storage::volume::{Volume, VolumeMount};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;

/// Scope tag selecting which extra volume groups reach a composition context
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropagationType(Cow<'static, str>);

impl PropagationType {
    /// Every component deployed for the service
    pub const GLANCE: Self = Self(Cow::Borrowed("Glance"));
    /// API pods
    pub const GLANCE_API: Self = Self(Cow::Borrowed("GlanceAPI"));
    /// Database sync job
    pub const DB_SYNC: Self = Self(Cow::Borrowed("DBSync"));

    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropagationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropagationType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Scopes used when composing API pods
pub const GLANCE_API_PROPAGATION: &[PropagationType] =
    &[PropagationType::GLANCE, PropagationType::GLANCE_API];

/// Scopes used when composing the database sync job
pub const DB_SYNC_PROPAGATION: &[PropagationType] = &[PropagationType::DB_SYNC];

/// One group of extra volumes and the mounts that attach them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolMounts {
    /// Propagation types this group applies to
    #[serde(default)]
    pub propagation: Vec<PropagationType>,

    /// Free-form storage backend tag (e.g. "Ceph")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_vol_type: Option<String>,

    #[serde(default)]
    pub volumes: Vec<Volume>,

    #[serde(default)]
    pub mounts: Vec<VolumeMount>,
}

impl VolMounts {
    /// Return this group once per matching (own tag, requested scope) pair.
    ///
    /// A group tagged with several requested scopes is returned several
    /// times. Callers relying on unique names must tag groups narrowly.
    pub fn propagate(&self, scopes: &[PropagationType]) -> Vec<VolMounts> {
        let mut matched = Vec::new();
        for tag in &self.propagation {
            for scope in scopes {
                if tag == scope {
                    matched.push(self.clone());
                }
            }
        }
        matched
    }
}

/// Capability of contributing extra volume groups to a composition context.
///
/// Implementations may fail; the error reaches the composition caller as-is.
pub trait ContributesVolumes {
    type Error;

    /// Volume groups that apply to the given scopes, in contribution order
    fn propagate(&self, scopes: &[PropagationType]) -> Result<Vec<VolMounts>, Self::Error>;
}

/// User-supplied extra mounts for a service instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraVolMounts {
    /// Label for this set of extra mounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Region the mounts belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Volume groups with their propagation tags
    #[serde(default)]
    pub extra_vol: Vec<VolMounts>,
}

impl ContributesVolumes for ExtraVolMounts {
    type Error = Infallible;

    fn propagate(&self, scopes: &[PropagationType]) -> Result<Vec<VolMounts>, Self::Error> {
        Ok(self
            .extra_vol
            .iter()
            .flat_map(|group| group.propagate(scopes))
            .collect())
    }
}
