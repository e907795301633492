//! Volumes command - print the composed pod volume list

use super::render;
use crate::cli::args::VolumesArgs;
use crate::compose::compose_volumes;
use crate::config::Config;
use crate::error::GlanceVolumesResult;
use crate::storage::PropagationType;
use tracing::info;

/// Execute the volumes command
pub async fn execute(args: VolumesArgs, config: &Config) -> GlanceVolumesResult<()> {
    config.validate()?;

    let scopes: &[PropagationType] = if args.scope.is_empty() {
        &config.propagation.volumes
    } else {
        &args.scope
    };
    info!(
        "Composing volumes for {} with scopes {:?}",
        config.instance.name, scopes
    );

    let Ok(volumes) = compose_volumes(
        &config.instance.name,
        &config.instance.pvc_name,
        &config.instance.secrets,
        &config.extra_mounts,
        scopes,
    );

    render::print_volumes(&volumes, args.format)
}
