//! Shared rendering of composed lists

use crate::cli::args::OutputFormat;
use crate::error::GlanceVolumesResult;
use crate::storage::{Volume, VolumeMount};
use console::style;

pub(crate) fn print_volumes(volumes: &[Volume], format: OutputFormat) -> GlanceVolumesResult<()> {
    match format {
        OutputFormat::Table => print_volume_table(volumes),
        OutputFormat::Json => print_json(volumes)?,
        OutputFormat::Plain => {
            for volume in volumes {
                println!("{}", volume.name);
            }
        }
    }
    Ok(())
}

pub(crate) fn print_mounts(mounts: &[VolumeMount], format: OutputFormat) -> GlanceVolumesResult<()> {
    match format {
        OutputFormat::Table => print_mount_table(mounts),
        OutputFormat::Json => print_json(mounts)?,
        OutputFormat::Plain => {
            for mount in mounts {
                println!("{}", mount.mount_path);
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> GlanceVolumesResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn print_volume_table(volumes: &[Volume]) {
    println!(
        "{:<24} {:<22} {:<30} {:<6}",
        style("NAME").bold(),
        style("KIND").bold(),
        style("SOURCE").bold(),
        style("MODE").bold()
    );
    println!("{}", "-".repeat(85));

    for volume in volumes {
        let mode = volume
            .default_mode()
            .map(format_mode)
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<24} {:<22} {:<30} {:<6}",
            volume.name,
            volume.source.kind().to_string(),
            volume.source.backing_name().unwrap_or("-"),
            mode
        );
    }

    println!();
    println!("{} volume(s)", volumes.len());
}

fn print_mount_table(mounts: &[VolumeMount]) {
    println!(
        "{:<24} {:<40} {:<6}",
        style("NAME").bold(),
        style("PATH").bold(),
        style("ACCESS").bold()
    );
    println!("{}", "-".repeat(72));

    for mount in mounts {
        let access = if mount.read_only {
            style(mount.access()).dim()
        } else {
            style(mount.access()).yellow()
        };
        let path = match &mount.sub_path {
            Some(sub) => format!("{} ({})", mount.mount_path, sub),
            None => mount.mount_path.clone(),
        };

        println!("{:<24} {:<40} {:<6}", mount.name, path, access);
    }

    println!();
    println!("{} mount(s)", mounts.len());
}

/// Render a file mode the way it is written in manifests (e.g. "0640")
fn format_mode(mode: i32) -> String {
    format!("{:04o}", mode)
}
