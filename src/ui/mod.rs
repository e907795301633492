//! Terminal output helpers
//!
//! Uses `cliclack` log lines in interactive terminals and falls back to
//! plain prefixed output in CI and when stdout is piped.

mod context;
mod output;

pub use context::UiContext;
pub use output::{step_info, step_ok_detail, step_warn_hint};
