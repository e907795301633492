//! Mounts command - print the composed container mounts of a phase

use super::render;
use crate::cli::args::MountsArgs;
use crate::compose::{compose_mounts, MountPhase};
use crate::config::Config;
use crate::error::GlanceVolumesResult;
use crate::storage::PropagationType;
use tracing::info;

/// Execute the mounts command
pub async fn execute(args: MountsArgs, config: &Config) -> GlanceVolumesResult<()> {
    config.validate()?;

    let phase = MountPhase::from(args.phase);
    let scopes: &[PropagationType] = if args.scope.is_empty() {
        config.propagation.for_phase(phase)
    } else {
        &args.scope
    };
    info!("Composing {} mounts with scopes {:?}", phase, scopes);

    let Ok(mounts) = compose_mounts(
        phase,
        &config.instance.secrets,
        &config.extra_mounts,
        scopes,
    );

    render::print_mounts(&mounts, args.format)
}
