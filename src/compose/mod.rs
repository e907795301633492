//! Volume and mount composition
//!
//! Every entry point follows the same template: the base list for its
//! context, then the extension contributions for the requested scopes,
//! then the projected secrets. Secrets are always the terminal suffix.
//!
//! Composition is pure. Calling an entry point twice with the same input
//! yields structurally identical output.

pub mod base;
pub mod extensions;
pub mod mounts;
pub mod secrets;

pub use base::base_volumes;
pub use extensions::{merge_contributions, merge_mounts, merge_volumes};
pub use mounts::{init_base_mounts, runtime_base_mounts, MountPhase};
pub use secrets::expand_secrets;

use crate::storage::{ContributesVolumes, PropagationType, Volume, VolumeMount};
use tracing::debug;

/// Compose the full volume list of a service pod.
///
/// `name` prefixes the config maps, `pvc_name` backs the data volume.
pub fn compose_volumes<E, S>(
    name: &str,
    pvc_name: &str,
    secret_names: &[S],
    extensions: &[E],
    scopes: &[PropagationType],
) -> Result<Vec<Volume>, E::Error>
where
    E: ContributesVolumes,
    S: AsRef<str>,
{
    let mut volumes = base_volumes(name, pvc_name);
    merge_volumes(&mut volumes, extensions, scopes)?;

    let (secret_volumes, _) = expand_secrets(secret_names);
    volumes.extend(secret_volumes);

    debug!(
        "Composed {} volumes for {} ({} secrets)",
        volumes.len(),
        name,
        secret_names.len()
    );
    Ok(volumes)
}

/// Compose the mounts of init containers
pub fn compose_init_mounts<E, S>(
    secret_names: &[S],
    extensions: &[E],
    scopes: &[PropagationType],
) -> Result<Vec<VolumeMount>, E::Error>
where
    E: ContributesVolumes,
    S: AsRef<str>,
{
    compose_mounts(MountPhase::Init, secret_names, extensions, scopes)
}

/// Compose the mounts of the main service containers
pub fn compose_runtime_mounts<E, S>(
    secret_names: &[S],
    extensions: &[E],
    scopes: &[PropagationType],
) -> Result<Vec<VolumeMount>, E::Error>
where
    E: ContributesVolumes,
    S: AsRef<str>,
{
    compose_mounts(MountPhase::Runtime, secret_names, extensions, scopes)
}

/// Compose the mounts of the given phase
pub fn compose_mounts<E, S>(
    phase: MountPhase,
    secret_names: &[S],
    extensions: &[E],
    scopes: &[PropagationType],
) -> Result<Vec<VolumeMount>, E::Error>
where
    E: ContributesVolumes,
    S: AsRef<str>,
{
    let mut mounts = phase.base_mounts();
    merge_mounts(&mut mounts, extensions, scopes)?;

    let (_, secret_mounts) = expand_secrets(secret_names);
    mounts.extend(secret_mounts);

    debug!("Composed {} {} mounts", mounts.len(), phase);
    Ok(mounts)
}
