use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use vbc::config::Config;

use super::{CheckArgs, Cli, Commands, ConfigAction};
use crate::cli_cmds::*;
use crate::ui::theme::Theme;

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, &cli.log_file)?;

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let theme = Theme::resolve(config.output.theme, cli.no_color);
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    match cli.command {
        Some(Commands::Check(args)) => {
            cmd_check(&args, &config, &theme)?;
        }
        Some(Commands::Presets) => {
            cmd_presets(&config, &theme)?;
        }
        Some(Commands::Links) => {
            cmd_links(&theme);
        }
        Some(Commands::Timings) => {
            cmd_timings(&theme);
        }
        Some(Commands::Depths) => {
            cmd_depths(&theme);
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => cmd_config_path(&config_path),
            ConfigAction::Init { force } => cmd_config_init(&config_path, force)?,
        },
        None => {
            cmd_check(&CheckArgs::default(), &config, &theme)?;
        }
    }

    Ok(())
}

/// Debug mode logs everything to a file; otherwise warnings go to stderr
/// and `RUST_LOG` can raise the level.
fn init_tracing(debug: bool, log_file: &Path) -> Result<()> {
    if debug {
        let file = File::create(log_file)
            .with_context(|| format!("failed to create log file {}", log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
