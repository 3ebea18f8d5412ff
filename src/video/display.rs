use super::timing::TimingStandard;
use super::units::Speed;
use crate::error::{Result, VideoError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Bits per color component. Ordered by bits per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorDepth {
    Bit8,
    Bit10,
    Bit12,
    Bit16,
}

impl ColorDepth {
    pub const ALL: [ColorDepth; 4] = [
        ColorDepth::Bit8,
        ColorDepth::Bit10,
        ColorDepth::Bit12,
        ColorDepth::Bit16,
    ];

    pub const fn bits_per_pixel(&self) -> u32 {
        match self {
            ColorDepth::Bit8 => 24,
            ColorDepth::Bit10 => 30,
            ColorDepth::Bit12 => 36,
            ColorDepth::Bit16 => 48,
        }
    }

    pub const fn bits_per_component(&self) -> u32 {
        self.bits_per_pixel() / 3
    }

    /// Short label for lists ("10 bit").
    pub fn title(&self) -> String {
        format!("{} bit", self.bits_per_component())
    }

    /// Accepts bits per component (8, 10, 12, 16) or bits per pixel (24..48).
    pub fn from_bits(bits: u32) -> Result<Self> {
        ColorDepth::ALL
            .into_iter()
            .find(|d| d.bits_per_component() == bits || d.bits_per_pixel() == bits)
            .ok_or_else(|| VideoError::UnknownColorDepth(bits.to_string()))
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bpc ({} bit/px)",
            self.bits_per_component(),
            self.bits_per_pixel()
        )
    }
}

impl FromStr for ColorDepth {
    type Err = VideoError;

    /// "10", "10bit", "10-bit", "10 bpc" and "30" all parse to 10-bit.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .trim_end_matches("bpc")
            .trim_end_matches("bit")
            .trim_end_matches([' ', '-']);
        digits
            .parse::<u32>()
            .map_err(|_| VideoError::UnknownColorDepth(s.to_string()))
            .and_then(|bits| {
                ColorDepth::from_bits(bits).map_err(|_| VideoError::UnknownColorDepth(s.to_string()))
            })
    }
}

/// What a link has to carry: raw bandwidth plus the depth DSC works against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub bandwidth: Speed,
    pub color_depth: ColorDepth,
}

/// A video signal as entered by the user. Immutable once built.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplaySignal {
    width: u32,
    height: u32,
    refresh_rate: u32,
    color_depth: ColorDepth,
    #[serde(serialize_with = "serialize_timing")]
    timing: &'static dyn TimingStandard,
    #[serde(skip)]
    effective_frame_size: u64,
}

fn serialize_timing<S: Serializer>(
    timing: &&'static dyn TimingStandard,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(timing.name())
}

impl DisplaySignal {
    /// Validate the inputs and build a signal.
    ///
    /// Rejects zero dimensions or refresh rate, refresh rates the timing
    /// standard cannot blank, and signals whose bandwidth overflows `u64`.
    pub fn new(
        width: u32,
        height: u32,
        refresh_rate: u32,
        color_depth: ColorDepth,
        timing: &'static dyn TimingStandard,
    ) -> Result<Self> {
        for (field, value) in [
            ("width", width),
            ("height", height),
            ("refresh rate", refresh_rate),
        ] {
            if value == 0 {
                tracing::debug!(field, "rejecting non-positive signal input");
                return Err(VideoError::InvalidInput { field, value });
            }
        }

        let effective_frame_size = timing.effective_frame_size(width, height, refresh_rate)?;

        // Widest depth is 48 bit/px, so this bounds every derived figure.
        effective_frame_size
            .checked_mul(refresh_rate as u64)
            .and_then(|rate| rate.checked_mul(ColorDepth::Bit16.bits_per_pixel() as u64))
            .ok_or(VideoError::SignalOverflow)?;

        Ok(Self {
            width,
            height,
            refresh_rate,
            color_depth,
            timing,
            effective_frame_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    pub fn color_depth(&self) -> ColorDepth {
        self.color_depth
    }

    pub fn timing(&self) -> &'static dyn TimingStandard {
        self.timing
    }

    /// Visible pixels per frame.
    pub fn frame_size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Pixels per frame including blanking, as reported by the timing standard.
    pub fn effective_frame_size(&self) -> u64 {
        self.effective_frame_size
    }

    pub fn effective_pixel_rate(&self) -> u64 {
        self.effective_frame_size * self.refresh_rate as u64
    }

    /// Uncompressed link bandwidth needed for this signal.
    pub fn required_bandwidth(&self) -> Speed {
        Speed::from_bits(self.effective_pixel_rate() * self.color_depth.bits_per_pixel() as u64)
    }

    /// Bandwidth left once DSC brings the stream down to 8 bit/px.
    pub fn dsc_target_bandwidth(&self) -> Speed {
        self.required_bandwidth()
            .scale(8, self.color_depth.bits_per_pixel() as u64)
    }

    pub fn requirement(&self) -> Requirement {
        Requirement {
            bandwidth: self.required_bandwidth(),
            color_depth: self.color_depth,
        }
    }
}

impl PartialEq for DisplaySignal {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.refresh_rate == other.refresh_rate
            && self.color_depth == other.color_depth
            && self.timing.name() == other.timing.name()
    }
}

impl fmt::Display for DisplaySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{}Hz, color depth: {}, timing: {}",
            self.width,
            self.height,
            self.refresh_rate,
            self.color_depth,
            self.timing.name()
        )
    }
}
