mod catalog;
mod check;
mod config_cmds;

pub use catalog::{cmd_depths, cmd_links, cmd_presets, cmd_timings};
pub use check::cmd_check;
pub use config_cmds::{cmd_config_init, cmd_config_path};
