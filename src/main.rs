mod cli;
mod cli_cmds;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
