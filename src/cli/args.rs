use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vbc")]
#[command(version)]
#[command(about = "Video bandwidth calculator for DisplayPort and HDMI links")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Write debug logs to the log file
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Debug log file path
    #[arg(long, global = true, default_value = "debug.log")]
    pub(crate) log_file: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check which link versions can carry a signal (default)
    Check(CheckArgs),
    /// List built-in and configured presets
    Presets,
    /// List DisplayPort and HDMI versions with their transmission modes
    Links,
    /// List timing standards
    Timings,
    /// List color depths
    Depths,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Default)]
pub(crate) struct CheckArgs {
    /// Start from a named preset (e.g. "4k Gaming")
    #[arg(short, long)]
    pub(crate) preset: Option<String>,

    /// Horizontal resolution in pixels
    #[arg(short = 'W', long)]
    pub(crate) width: Option<u32>,

    /// Vertical resolution in pixels
    #[arg(short = 'H', long)]
    pub(crate) height: Option<u32>,

    /// Refresh rate in Hz
    #[arg(short, long)]
    pub(crate) refresh: Option<u32>,

    /// Color depth in bits per component (8, 10, 12, 16)
    #[arg(short, long)]
    pub(crate) depth: Option<String>,

    /// Timing standard (CVT-RB, CVT-RBv2)
    #[arg(short, long)]
    pub(crate) timing: Option<String>,

    /// Show every mode of one DisplayPort version (e.g. "1.4")
    #[arg(long)]
    pub(crate) dp: Option<String>,

    /// Show every mode of one HDMI version (e.g. "2.1")
    #[arg(long)]
    pub(crate) hdmi: Option<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
