use crate::error::{Result, VideoError};
use std::fmt;

/// A blanking standard: how many pixels a link really carries per frame.
///
/// Implementors only need to describe the frame geometry; bandwidth
/// accounting, feasibility and mode selection work for any standard.
pub trait TimingStandard: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Pixels per frame including horizontal and vertical blanking.
    fn effective_frame_size(&self, width: u32, height: u32, refresh_rate: u32) -> Result<u64>;
}

/// CVT reduced blanking (v1 and v2 share the same shape).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CvtReducedBlanking {
    pub name: &'static str,
    /// Minimum vertical blanking interval, seconds.
    pub v_min: f64,
    /// Fixed horizontal blanking, pixels.
    pub h_blank: u32,
}

impl CvtReducedBlanking {
    /// Blank scan lines per frame. `None` once the blanking interval no
    /// longer fits inside the frame period.
    pub fn vertical_blank_lines(&self, height: u32, refresh_rate: u32) -> Option<u64> {
        let active_time = 1.0 / refresh_rate as f64 - self.v_min;
        if !active_time.is_finite() || active_time <= 0.0 {
            return None;
        }
        let lines = (height as f64 * self.v_min / active_time).ceil();
        Some(lines as u64)
    }
}

impl TimingStandard for CvtReducedBlanking {
    fn name(&self) -> &'static str {
        self.name
    }

    fn effective_frame_size(&self, width: u32, height: u32, refresh_rate: u32) -> Result<u64> {
        let blank_lines = self.vertical_blank_lines(height, refresh_rate).ok_or(
            VideoError::DegenerateTiming {
                timing: self.name,
                refresh_rate,
            },
        )?;
        let effective_height = height as u64 + blank_lines;
        let effective_width = width as u64 + self.h_blank as u64;
        effective_width
            .checked_mul(effective_height)
            .ok_or(VideoError::SignalOverflow)
    }
}

pub static CVT_RB: CvtReducedBlanking = CvtReducedBlanking {
    name: "CVT-RB",
    v_min: 0.00046,
    h_blank: 160,
};

pub static CVT_RBV2: CvtReducedBlanking = CvtReducedBlanking {
    name: "CVT-RBv2",
    v_min: 0.00046,
    h_blank: 80,
};

static TIMINGS: [&dyn TimingStandard; 2] = [&CVT_RB, &CVT_RBV2];

/// All known timing standards, in display order.
pub fn timings() -> &'static [&'static dyn TimingStandard] {
    &TIMINGS
}

/// Case-insensitive lookup by name ("cvt-rbv2", "CVT-RB", ...).
pub fn timing_by_name(name: &str) -> Result<&'static dyn TimingStandard> {
    let wanted = name.trim();
    timings()
        .iter()
        .copied()
        .find(|t| t.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| VideoError::UnknownTiming(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvt_rbv2_4k_144() {
        assert_eq!(CVT_RBV2.vertical_blank_lines(2160, 144), Some(154));
        assert_eq!(
            CVT_RBV2.effective_frame_size(3840, 2160, 144).unwrap(),
            3920 * 2314
        );
    }

    #[test]
    fn test_cvt_rb_uses_wider_hblank() {
        let rb = CVT_RB.effective_frame_size(1920, 1080, 60).unwrap();
        let rbv2 = CVT_RBV2.effective_frame_size(1920, 1080, 60).unwrap();
        assert_eq!(rb, 2080 * 1111);
        assert_eq!(rbv2, 2000 * 1111);
        assert!(rb > rbv2);
    }

    #[test]
    fn test_degenerate_refresh_rate_rejected() {
        // 1 / 2174 Hz is shorter than the 460 us blanking minimum.
        assert_eq!(CVT_RBV2.vertical_blank_lines(1080, 2174), None);
        assert_eq!(
            CVT_RBV2.effective_frame_size(1920, 1080, 2174),
            Err(VideoError::DegenerateTiming {
                timing: "CVT-RBv2",
                refresh_rate: 2174
            })
        );
        assert!(CVT_RBV2.effective_frame_size(1920, 1080, 2173).is_ok());
    }

    #[test]
    fn test_timing_lookup() {
        assert_eq!(timing_by_name("cvt-rbv2").unwrap().name(), "CVT-RBv2");
        assert_eq!(timing_by_name(" CVT-RB ").unwrap().name(), "CVT-RB");
        assert!(matches!(
            timing_by_name("gtf"),
            Err(VideoError::UnknownTiming(_))
        ));
    }

    #[test]
    fn test_timings_order() {
        let names: Vec<_> = timings().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["CVT-RB", "CVT-RBv2"]);
    }
}
