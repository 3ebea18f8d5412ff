use super::display::ColorDepth;
use super::units::Speed;
use super::{displayport, hdmi};
use crate::error::{Result, VideoError};
use serde::Serialize;
use std::fmt;

/// One physical-layer signalling mode of a link (e.g. HBR3, FRL 6).
pub trait TransmissionMode: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw line rate.
    fn bandwidth(&self) -> Speed;

    /// Line rate left for pixel data after encoding overhead.
    fn effective_bandwidth(&self) -> Speed;

    /// Capacity once DSC squeezes a `color_depth` stream to 8 bit/px.
    ///
    /// The compression ratio is the whole part of `bits_per_pixel / 8`:
    /// 3x at 8 and 10 bpc, 4x at 12 bpc, 6x at 16 bpc.
    fn max_compressed_bandwidth(&self, color_depth: ColorDepth) -> Speed {
        let ratio = u64::from(color_depth.bits_per_pixel() / 8);
        self.effective_bandwidth().scale(ratio, 1)
    }

    /// Share of the effective bandwidth `target` occupies, in percent.
    fn usage(&self, target: Speed) -> Result<f64> {
        target.as_percentage_of(self.effective_bandwidth())
    }
}

/// Encoding efficiency in tenths of a percent, applied to a raw line rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Efficiency(pub(crate) u64);

impl Efficiency {
    pub(crate) fn apply(self, raw: Speed) -> Speed {
        raw.scale(self.0, 1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkFamily {
    DisplayPort,
    Hdmi,
}

impl LinkFamily {
    pub fn label(&self) -> &'static str {
        match self {
            LinkFamily::DisplayPort => "DisplayPort",
            LinkFamily::Hdmi => "HDMI",
        }
    }

    /// Static catalog for this family, newest version first.
    pub fn versions(&self) -> &'static [LinkVersion] {
        match self {
            LinkFamily::DisplayPort => displayport::versions(),
            LinkFamily::Hdmi => hdmi::versions(),
        }
    }

    /// Find a version by its label ("2.1", "v1.4", "2.x").
    pub fn version(&self, label: &str) -> Result<&'static LinkVersion> {
        let wanted = label.trim().trim_start_matches(['v', 'V']);
        self.versions()
            .iter()
            .find(|v| v.version.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VideoError::UnknownLinkVersion {
                family: self.label(),
                version: label.to_string(),
            })
    }
}

impl fmt::Display for LinkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A published revision of a link standard and the modes it offers.
#[derive(Debug)]
pub struct LinkVersion {
    pub family: LinkFamily,
    pub version: &'static str,
    pub dsc: bool,
    pub hdr: bool,
    pub modes: &'static [&'static dyn TransmissionMode],
}

impl LinkVersion {
    /// HDR needs link support and at least 10 bits per component.
    pub fn can_hdr(&self, color_depth: ColorDepth) -> bool {
        self.hdr && color_depth >= ColorDepth::Bit10
    }
}

impl fmt::Display for LinkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.version)
    }
}
