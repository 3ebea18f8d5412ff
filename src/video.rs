//! Bandwidth and link feasibility engine.
//!
//! Everything here is pure: signals are immutable values, catalogs are
//! static tables, and each call recomputes from scratch.

mod display;
pub mod displayport;
mod evaluation;
mod feasibility;
pub mod hdmi;
mod link;
mod presets;
mod selector;
mod timing;
mod units;

pub use display::{ColorDepth, DisplaySignal, Requirement};
pub use evaluation::{evaluate_link_version, family_table, overview, representative_row, LinkRow};
pub use feasibility::{assess, assess_requirement, Feasibility, Verdict};
pub use link::{LinkFamily, LinkVersion, TransmissionMode};
pub use presets::{find_preset, presets, Preset};
pub use selector::select_mode;
pub use timing::{timing_by_name, timings, CvtReducedBlanking, TimingStandard, CVT_RB, CVT_RBV2};
pub use units::Speed;

use crate::error::Result;

/// Build a signal from already-parsed user input.
pub fn compute_signal(
    width: u32,
    height: u32,
    refresh_rate: u32,
    color_depth: ColorDepth,
    timing: &'static dyn TimingStandard,
) -> Result<DisplaySignal> {
    DisplaySignal::new(width, height, refresh_rate, color_depth, timing)
}

pub fn color_depths() -> &'static [ColorDepth] {
    &ColorDepth::ALL
}

pub fn displayport_versions() -> &'static [LinkVersion] {
    displayport::versions()
}

pub fn hdmi_versions() -> &'static [LinkVersion] {
    hdmi::versions()
}
