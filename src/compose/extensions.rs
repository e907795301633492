//! Folding extension contributions into a composed list
//!
//! The merger knows nothing about the base topology. It evaluates every
//! extension against the requested scopes and appends what comes back,
//! in extension order and then contribution order. Duplicate names or
//! paths are passed through untouched.

use crate::storage::{ContributesVolumes, PropagationType, VolMounts, Volume, VolumeMount};

/// Append the pieces selected by `pick` from every matching contribution.
///
/// Stops at the first extension error and returns it unchanged; `acc` may
/// then hold the contributions of the preceding extensions.
pub fn merge_contributions<E, T, F>(
    acc: &mut Vec<T>,
    extensions: &[E],
    scopes: &[PropagationType],
    mut pick: F,
) -> Result<(), E::Error>
where
    E: ContributesVolumes,
    F: FnMut(VolMounts) -> Vec<T>,
{
    for extension in extensions {
        for contribution in extension.propagate(scopes)? {
            acc.extend(pick(contribution));
        }
    }
    Ok(())
}

/// Append every matching contribution's volumes
pub fn merge_volumes<E: ContributesVolumes>(
    acc: &mut Vec<Volume>,
    extensions: &[E],
    scopes: &[PropagationType],
) -> Result<(), E::Error> {
    merge_contributions(acc, extensions, scopes, |c| c.volumes)
}

/// Append every matching contribution's mounts
pub fn merge_mounts<E: ContributesVolumes>(
    acc: &mut Vec<VolumeMount>,
    extensions: &[E],
    scopes: &[PropagationType],
) -> Result<(), E::Error> {
    merge_contributions(acc, extensions, scopes, |c| c.mounts)
}
