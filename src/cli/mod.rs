mod args;
mod runner;

pub(crate) use args::{CheckArgs, Cli, Commands, ConfigAction};
pub(crate) use runner::run;
