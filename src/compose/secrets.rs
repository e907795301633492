//! Secret projection

use crate::storage::{modes, paths, Volume, VolumeMount};

/// Project each secret into one volume and one read-only mount.
///
/// The returned vectors have equal length and are index aligned. Mount
/// paths are derived from the position only, so two entries with the same
/// secret name still land on distinct paths.
pub fn expand_secrets<S: AsRef<str>>(secret_names: &[S]) -> (Vec<Volume>, Vec<VolumeMount>) {
    let mut volumes = Vec::with_capacity(secret_names.len());
    let mut mounts = Vec::with_capacity(secret_names.len());

    for (idx, secret_name) in secret_names.iter().enumerate() {
        let secret_name = secret_name.as_ref();
        volumes.push(Volume::secret(secret_name, secret_name, modes::CONFIG));
        mounts.push(VolumeMount::read_only(secret_name, paths::secret(idx)));
    }

    (volumes, mounts)
}
