use super::display::{ColorDepth, DisplaySignal};
use super::timing::{TimingStandard, CVT_RBV2};
use crate::error::{Result, VideoError};
use serde::Serialize;

/// A named shortcut that fills in every field of a signal.
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub name: String,
    pub signal: DisplaySignal,
}

impl Preset {
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        refresh_rate: u32,
        color_depth: ColorDepth,
        timing: &'static dyn TimingStandard,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            signal: DisplaySignal::new(width, height, refresh_rate, color_depth, timing)?,
        })
    }

    /// List description ("144Hz 10 bpc (30 bit/px)").
    pub fn description(&self) -> String {
        format!(
            "{}Hz {}",
            self.signal.refresh_rate(),
            self.signal.color_depth()
        )
    }
}

const BUILTIN: [(&str, u32, u32, u32); 7] = [
    ("8k Display", 7680, 4320, 60),
    ("4k ESport", 3840, 2160, 240),
    ("4k Gaming", 3840, 2160, 144),
    ("2k ESport", 2560, 1440, 360),
    ("2k Gaming", 2560, 1440, 180),
    ("1080p ESport", 1920, 1080, 480),
    ("1080p Gaming", 1920, 1080, 240),
];

/// Built-in presets, all 10 bpc over CVT-RBv2.
pub fn presets() -> Result<Vec<Preset>> {
    build_presets(&BUILTIN)
}

fn build_presets(table: &[(&str, u32, u32, u32)]) -> Result<Vec<Preset>> {
    table
        .iter()
        .map(|&(name, width, height, refresh_rate)| {
            Preset::new(name, width, height, refresh_rate, ColorDepth::Bit10, &CVT_RBV2)
        })
        .collect()
}

/// Case-insensitive lookup in `presets`.
pub fn find_preset<'a>(presets: &'a [Preset], name: &str) -> Result<&'a Preset> {
    let wanted = name.trim();
    presets
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| VideoError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_all_valid() {
        assert_eq!(presets().unwrap().len(), BUILTIN.len());
    }

    #[test]
    fn test_invalid_builtin_surfaces_error() {
        let table: [(&str, u32, u32, u32); 2] = [("Good", 1920, 1080, 60), ("Broken", 1920, 0, 60)];
        let err = build_presets(&table).unwrap_err();
        assert_eq!(
            err,
            VideoError::InvalidInput {
                field: "height",
                value: 0
            }
        );
    }

    #[test]
    fn test_8k_display_preset() {
        let all = presets().unwrap();
        let preset = find_preset(&all, "8k Display").unwrap();
        let s = &preset.signal;
        assert_eq!(
            (s.width(), s.height(), s.refresh_rate()),
            (7680, 4320, 60)
        );
        assert_eq!(s.color_depth(), ColorDepth::Bit10);
        assert_eq!(s.timing().name(), "CVT-RBv2");
        // (7680 + 80) * (4320 + 123) * 60 * 30
        assert_eq!(s.effective_frame_size(), 34_477_680);
        assert_eq!(s.required_bandwidth().bits(), 62_059_824_000);
    }

    #[test]
    fn test_4k_gaming_preset() {
        let all = presets().unwrap();
        let preset = find_preset(&all, "4K GAMING").unwrap();
        assert_eq!(preset.signal.required_bandwidth().bits(), 39_186_201_600);
        assert_eq!(preset.description(), "144Hz 10 bpc (30 bit/px)");
    }

    #[test]
    fn test_preset_order() {
        let names: Vec<_> = presets().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("8k Display"));
        assert_eq!(names.last().map(String::as_str), Some("1080p Gaming"));
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(
            find_preset(&presets().unwrap(), "16k").unwrap_err(),
            VideoError::UnknownPreset("16k".to_string())
        );
    }
}
