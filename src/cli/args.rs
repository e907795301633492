//! CLI argument definitions using clap derive

use crate::compose::MountPhase;
use crate::storage::PropagationType;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// glance-volumes - Glance pod volume topology
///
/// Composes the volumes and container mounts of Glance service pods from
/// the fixed base topology, configured extra mounts and secrets.
#[derive(Parser, Debug)]
#[command(name = "glance-volumes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GLANCE_VOLUMES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .glance-volumes.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "text", env = "GLANCE_VOLUMES_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the composed pod volume list
    Volumes(VolumesArgs),

    /// Print the composed container mounts of a phase
    Mounts(MountsArgs),

    /// Print the volumes and mounts projected from secrets
    Secrets(SecretsArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the volumes command
#[derive(Parser, Debug)]
pub struct VolumesArgs {
    /// Propagation scopes (replaces the configured list)
    #[arg(short, long, value_parser = parse_scope)]
    pub scope: Vec<PropagationType>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the mounts command
#[derive(Parser, Debug)]
pub struct MountsArgs {
    /// Container phase
    pub phase: PhaseArg,

    /// Propagation scopes (replaces the configured list)
    #[arg(short, long, value_parser = parse_scope)]
    pub scope: Vec<PropagationType>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the secrets command
#[derive(Parser, Debug)]
pub struct SecretsArgs {
    /// Secret names (defaults to the configured secrets)
    pub names: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Show built-in defaults instead of the effective configuration
        #[arg(long)]
        defaults: bool,
    },

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Container phase selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    /// Init containers
    Init,
    /// Service containers
    Runtime,
}

impl From<PhaseArg> for MountPhase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Init => MountPhase::Init,
            PhaseArg::Runtime => MountPhase::Runtime,
        }
    }
}

/// Output format for composed lists
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON in pod spec layout
    Json,
    /// Simple text (one name per line)
    Plain,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Parse a non-empty propagation scope
fn parse_scope(s: &str) -> Result<PropagationType, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("propagation scope cannot be empty".to_string());
    }
    Ok(PropagationType::from(s))
}
