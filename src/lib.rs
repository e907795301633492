//! glance-volumes - Glance pod volume topology
//!
//! Builds the ordered volume and mount lists of Glance service pods: a fixed
//! base topology, extra volumes filtered by propagation scope, and projected
//! secrets. The [`compose`] module is pure and performs no I/O; the rest of
//! the crate loads configuration and renders the results.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod storage;
pub mod ui;

pub use compose::{
    compose_init_mounts, compose_mounts, compose_runtime_mounts, compose_volumes, expand_secrets,
    MountPhase,
};
pub use error::{GlanceVolumesError, GlanceVolumesResult};
pub use storage::{ContributesVolumes, ExtraVolMounts, PropagationType, VolMounts, Volume, VolumeMount};
