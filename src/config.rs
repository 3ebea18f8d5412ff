use crate::video::{self, ColorDepth, DisplaySignal, Preset};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: SignalConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<PresetConfig>,
}

/// A signal as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalConfig {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    /// Bits per component (8, 10, 12, 16).
    pub color_depth: u32,
    pub timing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetConfig {
    pub name: String,
    #[serde(flatten)]
    pub signal: SignalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    /// Print JSON instead of tables.
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
    None,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            width: 3840,
            height: 2160,
            refresh_rate: 144,
            color_depth: 10,
            timing: video::CVT_RBV2.name.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            json: false,
        }
    }
}

impl SignalConfig {
    pub fn to_signal(&self) -> Result<DisplaySignal> {
        let color_depth = ColorDepth::from_bits(self.color_depth)?;
        let timing = video::timing_by_name(&self.timing)?;
        Ok(video::compute_signal(
            self.width,
            self.height,
            self.refresh_rate,
            color_depth,
            timing,
        )?)
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vbc", "vbc")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load the default config file, falling back to built-in defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file means defaults; a corrupt one is
    /// reported and ignored, never overwritten.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        match toml::from_str::<Config>(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                eprintln!(
                    "Warning: Failed to parse config at {}: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Write this config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    /// Built-in presets followed by the ones from this config.
    pub fn all_presets(&self) -> Result<Vec<Preset>> {
        let mut all = video::presets()?;
        for preset in &self.presets {
            let signal = preset
                .signal
                .to_signal()
                .with_context(|| format!("Invalid preset '{}' in config", preset.name))?;
            all.push(Preset {
                name: preset.name.clone(),
                signal,
            });
        }
        Ok(all)
    }
}
