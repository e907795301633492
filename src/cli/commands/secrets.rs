//! Secrets command - show how secrets are projected into the pod

use super::render;
use crate::cli::args::{OutputFormat, SecretsArgs};
use crate::compose::expand_secrets;
use crate::config::Config;
use crate::error::GlanceVolumesResult;
use crate::storage::{Volume, VolumeMount};
use crate::ui::{self, UiContext};
use serde::Serialize;

/// Volumes and mounts side by side, index aligned
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SecretProjection<'a> {
    volumes: &'a [Volume],
    volume_mounts: &'a [VolumeMount],
}

/// Execute the secrets command
pub async fn execute(args: SecretsArgs, config: &Config) -> GlanceVolumesResult<()> {
    let names = if args.names.is_empty() {
        &config.instance.secrets
    } else {
        &args.names
    };

    if names.is_empty() && matches!(args.format, OutputFormat::Table) {
        let ctx = UiContext::detect();
        ui::step_info(&ctx, "No secrets configured");
        return Ok(());
    }

    let (volumes, mounts) = expand_secrets(names);

    match args.format {
        OutputFormat::Json => {
            let projection = SecretProjection {
                volumes: &volumes,
                volume_mounts: &mounts,
            };
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
        OutputFormat::Plain => {
            for mount in &mounts {
                println!("{}\t{}", mount.name, mount.mount_path);
            }
        }
        OutputFormat::Table => {
            render::print_volumes(&volumes, OutputFormat::Table)?;
            println!();
            render::print_mounts(&mounts, OutputFormat::Table)?;
        }
    }

    Ok(())
}
