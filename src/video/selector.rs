use super::display::Requirement;
use super::link::TransmissionMode;
use tracing::debug;

/// Pick the mode that should represent a link version for `requirement`.
///
/// Returns the lowest-capacity mode that carries the signal uncompressed,
/// otherwise the first mode (in ranked order) that carries it with DSC,
/// otherwise the highest-capacity mode so the caller can still report a
/// failing row. `None` only for an empty mode list.
///
/// Modes are ranked by effective bandwidth, highest first; the sort is
/// stable so equal modes keep their catalog order.
pub fn select_mode<'a>(
    modes: &[&'a dyn TransmissionMode],
    requirement: &Requirement,
) -> Option<&'a dyn TransmissionMode> {
    let mut ranked = modes.to_vec();
    ranked.sort_by(|a, b| b.effective_bandwidth().cmp(&a.effective_bandwidth()));

    let required = requirement.bandwidth;
    let mut last = *ranked.first()?;

    for mode in ranked {
        if mode.effective_bandwidth() >= required {
            last = mode;
        } else if last.effective_bandwidth() >= required {
            debug!(mode = last.name(), %required, "cheapest uncompressed mode");
            return Some(last);
        } else if mode.max_compressed_bandwidth(requirement.color_depth) >= required {
            debug!(mode = mode.name(), %required, "cheapest compressed mode");
            return Some(mode);
        }
    }

    debug!(mode = last.name(), %required, "scan exhausted, keeping last candidate");
    Some(last)
}
