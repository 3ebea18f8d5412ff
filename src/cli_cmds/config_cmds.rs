use anyhow::Result;
use std::path::Path;
use vbc::config::Config;

pub fn cmd_config_path(path: &Path) {
    println!("{}", path.display());
}

pub fn cmd_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}
