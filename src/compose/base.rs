//! Fixed volume topology every service instance needs

use crate::storage::{modes, names, Volume};

/// Build the four base volumes in their fixed order:
/// scripts, config-data, config-data-merged, lib-data.
pub fn base_volumes(name: &str, pvc_name: &str) -> Vec<Volume> {
    vec![
        Volume::config_map(names::SCRIPTS, format!("{}-scripts", name), modes::SCRIPTS),
        Volume::config_map(
            names::CONFIG_DATA,
            format!("{}-config-data", name),
            modes::CONFIG,
        ),
        Volume::empty_dir(names::CONFIG_DATA_MERGED),
        Volume::persistent_claim(names::LIB_DATA, pvc_name),
    ]
}
