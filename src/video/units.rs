use crate::error::{Result, VideoError};
use serde::{Deserialize, Serialize};
use std::fmt;

const KILO: u64 = 1_000;
const MEGA: u64 = 1_000_000;
const GIGA: u64 = 1_000_000_000;
const TERA: u64 = 1_000_000_000_000;

/// A data rate in bits per second. Decimal (SI) scaling throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed {
    bits: u64,
}

impl Speed {
    pub const ZERO: Speed = Speed { bits: 0 };

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Whole megabits; used for catalog literals where a const is needed.
    pub const fn from_mbits(mbits: u64) -> Self {
        Self {
            bits: mbits * MEGA,
        }
    }

    /// Decimal gigabits (1 Gb = 10^9 bits). Negative or NaN input yields zero.
    pub fn from_gbits(gbits: f64) -> Self {
        if !gbits.is_finite() || gbits <= 0.0 {
            return Self::ZERO;
        }
        Self {
            bits: (gbits * GIGA as f64).round() as u64,
        }
    }

    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// `self * 100 / total`.
    pub fn as_percentage_of(&self, total: Speed) -> Result<f64> {
        if total.is_zero() {
            return Err(VideoError::ZeroBandwidth);
        }
        Ok(self.bits as f64 * 100.0 / total.bits as f64)
    }

    /// Scale by `numerator / denominator` with integer math (truncating).
    pub(crate) fn scale(&self, numerator: u64, denominator: u64) -> Speed {
        let scaled = self.bits as u128 * numerator as u128 / denominator as u128;
        Speed {
            bits: u64::try_from(scaled).unwrap_or(u64::MAX),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (divisor, unit) = match self.bits {
            b if b >= TERA => (TERA, "Tb/s"),
            b if b >= GIGA => (GIGA, "Gb/s"),
            b if b >= MEGA => (MEGA, "Mb/s"),
            b if b >= KILO => (KILO, "Kb/s"),
            _ => return write!(f, "{} b/s", self.bits),
        };
        write!(f, "{:.2} {}", self.bits as f64 / divisor as f64, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gbits_is_decimal() {
        assert_eq!(Speed::from_gbits(1.0).bits(), 1_000_000_000);
        assert_eq!(Speed::from_gbits(6.48).bits(), 6_480_000_000);
        assert_eq!(Speed::from_gbits(6.48), Speed::from_mbits(6_480));
    }

    #[test]
    fn test_from_gbits_rejects_negative() {
        assert_eq!(Speed::from_gbits(-3.0), Speed::ZERO);
        assert_eq!(Speed::from_gbits(f64::NAN), Speed::ZERO);
    }

    #[test]
    fn test_ordering_by_bits() {
        assert!(Speed::from_gbits(10.8) > Speed::from_gbits(6.48));
        assert!(Speed::from_bits(1) < Speed::from_bits(2));
        assert_eq!(Speed::from_bits(42), Speed::from_bits(42));
    }

    #[test]
    fn test_percentage_of() {
        let half = Speed::from_gbits(5.0);
        let whole = Speed::from_gbits(10.0);
        assert_eq!(half.as_percentage_of(whole).unwrap(), 50.0);
        assert_eq!(whole.as_percentage_of(half).unwrap(), 200.0);
    }

    #[test]
    fn test_percentage_of_zero_fails() {
        assert_eq!(
            Speed::from_gbits(1.0).as_percentage_of(Speed::ZERO),
            Err(VideoError::ZeroBandwidth)
        );
    }

    #[test]
    fn test_display_units() {
        assert_eq!(Speed::from_bits(999).to_string(), "999 b/s");
        assert_eq!(Speed::from_bits(1_500).to_string(), "1.50 Kb/s");
        assert_eq!(Speed::from_mbits(250).to_string(), "250.00 Mb/s");
        assert_eq!(Speed::from_gbits(39.1862016).to_string(), "39.19 Gb/s");
        assert_eq!(Speed::from_gbits(1_200.0).to_string(), "1.20 Tb/s");
    }

    #[test]
    fn test_scale_truncates() {
        assert_eq!(Speed::from_bits(10).scale(1, 3).bits(), 3);
        assert_eq!(Speed::from_gbits(40.0).scale(967, 1000).bits(), 38_680_000_000);
    }
}
