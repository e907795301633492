//! Storage model shared by the composition engine
//!
//! Volume names, mount paths and file modes below are a stable contract
//! with the pod specification builders and the container images.

#[cfg(feature = "k8s-openapi")]
pub mod k8s;
pub mod propagation;
pub mod volume;

pub use propagation::{
    ContributesVolumes, ExtraVolMounts, PropagationType, VolMounts, DB_SYNC_PROPAGATION,
    GLANCE_API_PROPAGATION,
};
pub use volume::{Volume, VolumeKind, VolumeMount, VolumeSource};

/// Volume names of the base topology
pub mod names {
    /// Container scripts config map
    pub const SCRIPTS: &str = "scripts";
    /// Raw service configuration
    pub const CONFIG_DATA: &str = "config-data";
    /// Scratch space holding the configuration merged at init time
    pub const CONFIG_DATA_MERGED: &str = "config-data-merged";
    /// Persistent image store
    pub const LIB_DATA: &str = "lib-data";
}

/// Mount paths inside the containers
pub mod paths {
    pub const SCRIPTS: &str = "/usr/local/bin/container-scripts";
    pub const CONFIG_DEFAULT: &str = "/var/lib/config-data/default";
    pub const CONFIG_MERGED: &str = "/var/lib/config-data/merged";
    pub const DATA: &str = "/var/lib/glance";
    /// Prefix of secret mounts; the secret's index is appended
    pub const SECRET_PREFIX: &str = "/var/lib/config-data/secret-";

    /// Mount path of the `index`-th projected secret
    pub fn secret(index: usize) -> String {
        format!("{}{}", SECRET_PREFIX, index)
    }
}

/// Default file modes of projected volumes
pub mod modes {
    /// Executable scripts
    pub const SCRIPTS: i32 = 0o755;
    /// Configuration and secret files
    pub const CONFIG: i32 = 0o640;
}
