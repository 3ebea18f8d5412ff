use super::display::{DisplaySignal, Requirement};
use super::link::{LinkVersion, TransmissionMode};
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// How a signal fits on one mode of a link version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Effective bandwidth covers the signal as is.
    Fits,
    /// Only fits once DSC is applied.
    FitsWithDsc,
    /// DSC is available but even the compressed stream is too large.
    InsufficientBandwidth,
    /// Too large and the version has no DSC to fall back on.
    NoDsc,
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Fits | Verdict::FitsWithDsc)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::Fits => "✅",
            Verdict::FitsWithDsc => "❗ (DSC)",
            Verdict::InsufficientBandwidth => "❌ (Bandwidth)",
            Verdict::NoDsc => "❌ (No DSC)",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feasibility {
    pub verdict: Verdict,
    pub hdr: bool,
    /// Uncompressed signal against the mode's effective bandwidth, percent.
    pub usage: f64,
}

/// Classify `signal` on `mode` of `link`.
pub fn assess(
    link: &LinkVersion,
    mode: &dyn TransmissionMode,
    signal: &DisplaySignal,
) -> Result<Feasibility> {
    assess_requirement(link, mode, &signal.requirement())
}

pub fn assess_requirement(
    link: &LinkVersion,
    mode: &dyn TransmissionMode,
    requirement: &Requirement,
) -> Result<Feasibility> {
    let usage = mode.usage(requirement.bandwidth)?;
    let can_hdr = link.can_hdr(requirement.color_depth);

    let (verdict, hdr) = if mode.effective_bandwidth() >= requirement.bandwidth {
        (Verdict::Fits, can_hdr)
    } else if !link.dsc {
        (Verdict::NoDsc, false)
    } else if mode.max_compressed_bandwidth(requirement.color_depth) >= requirement.bandwidth {
        (Verdict::FitsWithDsc, can_hdr)
    } else {
        (Verdict::InsufficientBandwidth, false)
    };

    Ok(Feasibility {
        verdict,
        hdr,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::display::ColorDepth;
    use crate::video::link::LinkFamily;
    use crate::video::timing::CVT_RBV2;
    use crate::video::units::Speed;

    fn dp(version: &str) -> &'static LinkVersion {
        LinkFamily::DisplayPort.version(version).unwrap()
    }

    fn hdmi(version: &str) -> &'static LinkVersion {
        LinkFamily::Hdmi.version(version).unwrap()
    }

    fn need(gbits: f64, color_depth: ColorDepth) -> Requirement {
        Requirement {
            bandwidth: Speed::from_gbits(gbits),
            color_depth,
        }
    }

    #[test]
    fn test_fits_uncompressed_follows_can_hdr() {
        let link = dp("1.4");
        let mode = link.modes[0];
        let hdr10 = assess_requirement(link, mode, &need(20.0, ColorDepth::Bit10)).unwrap();
        assert_eq!(hdr10.verdict, Verdict::Fits);
        assert!(hdr10.hdr);

        let sdr = assess_requirement(link, mode, &need(20.0, ColorDepth::Bit8)).unwrap();
        assert_eq!(sdr.verdict, Verdict::Fits);
        assert!(!sdr.hdr);
    }

    #[test]
    fn test_exact_capacity_fits() {
        let link = dp("1.4");
        let mode = link.modes[0];
        let exact = Requirement {
            bandwidth: mode.effective_bandwidth(),
            color_depth: ColorDepth::Bit10,
        };
        let result = assess_requirement(link, mode, &exact).unwrap();
        assert_eq!(result.verdict, Verdict::Fits);
        assert_eq!(result.usage, 100.0);
    }

    #[test]
    fn test_fits_with_dsc_keeps_hdr() {
        // HBR3: 25.92 Gb/s effective, 77.76 Gb/s compressed at 10 bpc.
        let link = dp("1.4");
        let result = assess_requirement(link, link.modes[0], &need(39.0, ColorDepth::Bit10)).unwrap();
        assert_eq!(result.verdict, Verdict::FitsWithDsc);
        assert!(result.hdr);
        assert!(result.usage > 100.0);
    }

    #[test]
    fn test_insufficient_bandwidth_drops_hdr() {
        let link = dp("1.4");
        let result =
            assess_requirement(link, link.modes[0], &need(120.0, ColorDepth::Bit10)).unwrap();
        assert_eq!(result.verdict, Verdict::InsufficientBandwidth);
        assert!(!result.hdr);
    }

    #[test]
    fn test_no_dsc_drops_hdr() {
        // HDMI 2.0 supports HDR but not DSC.
        let link = hdmi("2.0");
        let tmds600 = link.modes[2];
        let result = assess_requirement(link, tmds600, &need(20.0, ColorDepth::Bit10)).unwrap();
        assert_eq!(result.verdict, Verdict::NoDsc);
        assert!(!result.hdr);

        let fits = assess_requirement(link, tmds600, &need(10.0, ColorDepth::Bit10)).unwrap();
        assert_eq!(fits.verdict, Verdict::Fits);
        assert!(fits.hdr);
    }

    #[test]
    fn test_hdmi14_1080p240_has_no_hdr() {
        // 13.9968 Gb/s against TMDS 340's 8.16 Gb/s.
        let signal = DisplaySignal::new(1920, 1080, 240, ColorDepth::Bit8, &CVT_RBV2).unwrap();
        assert_eq!(signal.required_bandwidth().bits(), 13_996_800_000);
        let link = hdmi("1.4");
        let result = assess(link, link.modes[1], &signal).unwrap();
        assert_eq!(result.verdict, Verdict::NoDsc);
        assert!(!result.hdr);
    }

    #[test]
    fn test_hdmi14_1080p120_fits_tmds340() {
        let signal = DisplaySignal::new(1920, 1080, 120, ColorDepth::Bit8, &CVT_RBV2).unwrap();
        assert_eq!(signal.required_bandwidth().bits(), 6_589_440_000);
        let link = hdmi("1.4");
        let result = assess(link, link.modes[1], &signal).unwrap();
        assert_eq!(result.verdict, Verdict::Fits);
        assert!(!result.hdr);
    }

    #[test]
    fn test_5k_165_exceeds_hbr3_dsc_capacity() {
        // 80.23 Gb/s needed; HBR3 compresses 10 bpc only 3x, to 77.76 Gb/s.
        let signal = DisplaySignal::new(5120, 2880, 165, ColorDepth::Bit10, &CVT_RBV2).unwrap();
        assert_eq!(signal.required_bandwidth().bits(), 80_231_580_000);
        let link = dp("1.4");
        let hbr3 = link.modes[0];
        assert_eq!(
            hbr3.max_compressed_bandwidth(ColorDepth::Bit10).bits(),
            77_760_000_000
        );
        let result = assess(link, hbr3, &signal).unwrap();
        assert_eq!(result.verdict, Verdict::InsufficientBandwidth);
        assert!(!result.hdr);

        // The same signal at 12 bpc gets the 4x ratio and fits with DSC.
        let deep = DisplaySignal::new(5120, 2880, 165, ColorDepth::Bit12, &CVT_RBV2).unwrap();
        assert_eq!(deep.required_bandwidth().bits(), 96_277_896_000);
        let result = assess(link, hbr3, &deep).unwrap();
        assert_eq!(result.verdict, Verdict::FitsWithDsc);
        assert!(result.hdr);
    }

    #[test]
    fn test_verdict_symbols() {
        assert_eq!(Verdict::Fits.symbol(), "✅");
        assert_eq!(Verdict::FitsWithDsc.to_string(), "❗ (DSC)");
        assert_eq!(Verdict::InsufficientBandwidth.symbol(), "❌ (Bandwidth)");
        assert_eq!(Verdict::NoDsc.symbol(), "❌ (No DSC)");
        assert!(Verdict::FitsWithDsc.is_ok());
        assert!(!Verdict::NoDsc.is_ok());
    }
}
