use super::link::{Efficiency, LinkFamily, LinkVersion, TransmissionMode};
use super::units::Speed;

/// TMDS, 8b/10b.
const EFFICIENCY_TMDS: Efficiency = Efficiency(800);
/// Fixed Rate Link, 16b/18b plus packetization.
const EFFICIENCY_FRL: Efficiency = Efficiency(888);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HdmiMode {
    pub name: &'static str,
    pub max_bandwidth: Speed,
}

impl HdmiMode {
    pub const fn new(name: &'static str, max_bandwidth: Speed) -> Self {
        Self {
            name,
            max_bandwidth,
        }
    }

    fn efficiency(&self) -> Efficiency {
        if self.name.contains("FRL") {
            EFFICIENCY_FRL
        } else {
            EFFICIENCY_TMDS
        }
    }
}

impl TransmissionMode for HdmiMode {
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

pub const TMDS_165: HdmiMode = HdmiMode::new("TMDS (165 MHz)", Speed::from_mbits(4_950));
pub const TMDS_340: HdmiMode = HdmiMode::new("TMDS (340 MHz)", Speed::from_mbits(10_200));
pub const TMDS_600: HdmiMode = HdmiMode::new("TMDS (600 MHz)", Speed::from_mbits(18_000));
pub const FRL_1: HdmiMode = HdmiMode::new("FRL 1", Speed::from_mbits(9_000));
pub const FRL_2: HdmiMode = HdmiMode::new("FRL 2", Speed::from_mbits(18_000));
pub const FRL_3: HdmiMode = HdmiMode::new("FRL 3", Speed::from_mbits(24_000));
pub const FRL_4: HdmiMode = HdmiMode::new("FRL 4", Speed::from_mbits(32_000));
pub const FRL_5: HdmiMode = HdmiMode::new("FRL 5", Speed::from_mbits(40_000));
pub const FRL_6: HdmiMode = HdmiMode::new("FRL 6", Speed::from_mbits(48_000));
pub const FRL_7: HdmiMode = HdmiMode::new("FRL 7", Speed::from_mbits(64_000));
pub const FRL_8: HdmiMode = HdmiMode::new("FRL 8", Speed::from_mbits(80_000));
pub const FRL_9: HdmiMode = HdmiMode::new("FRL 9", Speed::from_mbits(96_000));

static VERSIONS: [LinkVersion; 8] = [
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "2.2",
        dsc: true,
        hdr: true,
        modes: &[
            &FRL_1, &FRL_2, &FRL_3, &FRL_4, &FRL_5, &FRL_6, &FRL_7, &FRL_8, &FRL_9,
        ],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "2.1",
        dsc: true,
        hdr: true,
        modes: &[&FRL_1, &FRL_2, &FRL_3, &FRL_4, &FRL_5, &FRL_6],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "2.0",
        dsc: false,
        hdr: true,
        modes: &[&TMDS_165, &TMDS_340, &TMDS_600],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "1.4",
        dsc: false,
        hdr: false,
        modes: &[&TMDS_165, &TMDS_340],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "1.3",
        dsc: false,
        hdr: false,
        modes: &[&TMDS_165, &TMDS_340],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "1.2",
        dsc: false,
        hdr: false,
        modes: &[&TMDS_165],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "1.1",
        dsc: false,
        hdr: false,
        modes: &[&TMDS_165],
    },
    LinkVersion {
        family: LinkFamily::Hdmi,
        version: "1.0",
        dsc: false,
        hdr: false,
        modes: &[&TMDS_165],
    },
];

pub fn versions() -> &'static [LinkVersion] {
    &VERSIONS
}
