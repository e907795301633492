//! glance-volumes - Glance pod volume topology
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use glance_volumes::cli::args::{ConfigAction, ConfigArgs, LogFormat};
use glance_volumes::cli::{Cli, Commands};
use glance_volumes::config::{Config, ConfigManager};
use glance_volumes::error::{GlanceVolumesError, GlanceVolumesResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GlanceVolumesResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("glance_volumes=warn"),
        1 => EnvFilter::new("glance_volumes=info"),
        _ => EnvFilter::new("glance_volumes=debug"),
    };

    // Logs go to stderr so composed output on stdout stays parseable
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    // Path, init and defaults must work without a loadable config file
    let command = match cli.command {
        Commands::Config(
            args @ ConfigArgs {
                action:
                    Some(
                        ConfigAction::Path
                        | ConfigAction::Init { .. }
                        | ConfigAction::Show { defaults: true },
                    ),
            },
        ) => {
            return glance_volumes::cli::commands::config(args, &Config::default(), &config_manager)
                .await;
        }
        other => other,
    };

    // Find local config unless --no-local is set
    let local_config_path = if cli.no_local {
        debug!("Local config discovery disabled (--no-local)");
        None
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| GlanceVolumesError::io("getting current directory", e))?;
        let found = ConfigManager::find_local_config(&cwd);
        if let Some(ref path) = found {
            debug!("Found local config: {}", path.display());
        }
        found
    };

    let config = match local_config_path.as_deref() {
        Some(local) => config_manager.load_merged(Some(local)).await?,
        None => config_manager.load().await?,
    };

    match command {
        Commands::Volumes(args) => glance_volumes::cli::commands::volumes(args, &config).await,
        Commands::Mounts(args) => glance_volumes::cli::commands::mounts(args, &config).await,
        Commands::Secrets(args) => glance_volumes::cli::commands::secrets(args, &config).await,
        Commands::Config(args) => {
            glance_volumes::cli::commands::config(args, &config, &config_manager).await
        }
    }
}
