use super::display::DisplaySignal;
use super::feasibility::{self, Feasibility};
use super::link::{LinkFamily, LinkVersion, TransmissionMode};
use super::selector::select_mode;
use super::units::Speed;
use crate::error::Result;
use serde::Serialize;

/// One table row: a link version, one of its modes, and the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct LinkRow {
    pub family: LinkFamily,
    pub version: &'static str,
    pub mode: &'static str,
    pub max_bandwidth: Speed,
    pub effective_bandwidth: Speed,
    #[serde(flatten)]
    pub feasibility: Feasibility,
}

impl LinkRow {
    fn build(
        link: &LinkVersion,
        mode: &'static dyn TransmissionMode,
        signal: &DisplaySignal,
    ) -> Result<Self> {
        Ok(Self {
            family: link.family,
            version: link.version,
            mode: mode.name(),
            max_bandwidth: mode.bandwidth(),
            effective_bandwidth: mode.effective_bandwidth(),
            feasibility: feasibility::assess(link, mode, signal)?,
        })
    }

    pub fn hdr_label(&self) -> &'static str {
        if self.feasibility.hdr {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn usage_label(&self) -> String {
        format!("{:.1}%", self.feasibility.usage)
    }
}

/// Every mode of a pinned link version, in catalog order.
pub fn evaluate_link_version(signal: &DisplaySignal, link: &LinkVersion) -> Result<Vec<LinkRow>> {
    link.modes
        .iter()
        .map(|mode| LinkRow::build(link, *mode, signal))
        .collect()
}

/// The representative row for one version, or `None` when it has no modes.
pub fn representative_row(signal: &DisplaySignal, link: &LinkVersion) -> Result<Option<LinkRow>> {
    select_mode(link.modes, &signal.requirement())
        .map(|mode| LinkRow::build(link, mode, signal))
        .transpose()
}

/// One row per version of `family`, newest first.
pub fn overview(signal: &DisplaySignal, family: LinkFamily) -> Result<Vec<LinkRow>> {
    let mut rows = Vec::new();
    for link in family.versions() {
        match representative_row(signal, link)? {
            Some(row) => rows.push(row),
            None => tracing::warn!(%link, "link version has no modes, skipping"),
        }
    }
    Ok(rows)
}

/// Table for `family`: all modes of `pinned` if given, else the overview.
pub fn family_table(
    signal: &DisplaySignal,
    family: LinkFamily,
    pinned: Option<&LinkVersion>,
) -> Result<Vec<LinkRow>> {
    match pinned {
        Some(link) => evaluate_link_version(signal, link),
        None => overview(signal, family),
    }
}
