use super::link::{Efficiency, LinkFamily, LinkVersion, TransmissionMode};
use super::units::Speed;

/// 8b/10b channel coding (RBR through HBR3).
const EFFICIENCY_8B10B: Efficiency = Efficiency(800);
/// 128b/132b channel coding (UHBR).
const EFFICIENCY_128B132B: Efficiency = Efficiency(967);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPortMode {
    pub name: &'static str,
    pub max_bandwidth: Speed,
}

impl DisplayPortMode {
    pub const fn new(name: &'static str, max_bandwidth: Speed) -> Self {
        Self {
            name,
            max_bandwidth,
        }
    }

    fn efficiency(&self) -> Efficiency {
        match self.name {
            "RBR" | "HBR" | "HBR2" | "HBR3" => EFFICIENCY_8B10B,
            _ => EFFICIENCY_128B132B,
        }
    }
}

impl TransmissionMode for DisplayPortMode {
    fn name(&self) -> &'static str {
        self.name
    }

    fn bandwidth(&self) -> Speed {
        self.max_bandwidth
    }

    fn effective_bandwidth(&self) -> Speed {
        self.efficiency().apply(self.max_bandwidth)
    }
}

// Four-lane aggregate line rates.
pub const RBR: DisplayPortMode = DisplayPortMode::new("RBR", Speed::from_mbits(6_480));
pub const HBR: DisplayPortMode = DisplayPortMode::new("HBR", Speed::from_mbits(10_800));
pub const HBR2: DisplayPortMode = DisplayPortMode::new("HBR2", Speed::from_mbits(21_600));
pub const HBR3: DisplayPortMode = DisplayPortMode::new("HBR3", Speed::from_mbits(32_400));
pub const UHBR10: DisplayPortMode = DisplayPortMode::new("UHBR10", Speed::from_mbits(40_000));
pub const UHBR13_5: DisplayPortMode = DisplayPortMode::new("UHBR13.5", Speed::from_mbits(54_000));
pub const UHBR20: DisplayPortMode = DisplayPortMode::new("UHBR20", Speed::from_mbits(80_000));

static VERSIONS: [LinkVersion; 6] = [
    LinkVersion {
        family: LinkFamily::DisplayPort,
        version: "2.x",
        dsc: true,
        hdr: true,
        modes: &[&UHBR20, &UHBR13_5, &UHBR10],
    },
    LinkVersion {
        family: LinkFamily::DisplayPort,
        version: "1.4",
        dsc: true,
        hdr: true,
        modes: &[&HBR3],
    },
    LinkVersion {
        family: LinkFamily::DisplayPort,
        version: "1.3",
        dsc: false,
        hdr: false,
        modes: &[&HBR3],
    },
    LinkVersion {
        family: LinkFamily::DisplayPort,
        version: "1.2",
        dsc: false,
        hdr: false,
        modes: &[&HBR2],
    },
    LinkVersion {
        family: LinkFamily::DisplayPort,
        version: "1.1",
        dsc: false,
        hdr: false,
        modes: &[&HBR],
    },
    LinkVersion {
        family: LinkFamily::DisplayPort,
        version: "1.0",
        dsc: false,
        hdr: false,
        modes: &[&HBR, &RBR],
    },
];

pub fn versions() -> &'static [LinkVersion] {
    &VERSIONS
}
