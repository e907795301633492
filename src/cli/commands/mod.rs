//! CLI command implementations

pub mod config;
pub mod mounts;
mod render;
pub mod secrets;
pub mod volumes;

pub use config::execute as config;
pub use mounts::execute as mounts;
pub use secrets::execute as secrets;
pub use volumes::execute as volumes;
