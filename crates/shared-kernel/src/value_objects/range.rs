// crates/shared-kernel/src/value_objects/range.rs
use serde::{Deserialize, Serialize};

use super::SizeValue;

/// Megabytes-per-minute rate bounds picked by the dual-handle slider.
///
/// Construction normalizes a reversed pair, so `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliderRange {
    low: u16,
    high: u16,
}

impl SliderRange {
    pub fn new(low: u16, high: u16) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self { low: high, high: low }
        }
    }

    #[inline]
    pub const fn low(self) -> u16 {
        self.low
    }

    #[inline]
    pub const fn high(self) -> u16 {
        self.high
    }

    /// Projects both bounds to byte sizes for the given runtime in minutes:
    /// `bytes = bound * 1024 * 1024 * minutes`, saturating at `i64::MAX` so
    /// extreme bound/minute combinations stay total.
    pub fn size_at(self, minutes: u32) -> (SizeValue, SizeValue) {
        let scale = |mb: u16| {
            let megabytes = i64::from(mb) * 1024 * 1024;
            SizeValue::new(megabytes.saturating_mul(i64::from(minutes)))
        };
        (scale(self.low), scale(self.high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_pair_is_normalized() {
        let range = SliderRange::new(200, 10);
        assert_eq!(range.low(), 10);
        assert_eq!(range.high(), 200);
    }

    #[test]
    fn size_at_scales_megabytes_per_minute() {
        let range = SliderRange::new(10, 200);
        let (min, max) = range.size_at(30);
        assert_eq!(min.bytes(), 10 * 1024 * 1024 * 30);
        assert_eq!(max.bytes(), 200 * 1024 * 1024 * 30);
    }

    #[test]
    fn zero_bound_projects_to_unlimited() {
        let (min, _) = SliderRange::new(0, 256).size_at(60);
        assert!(min.is_unlimited());
    }

    #[test]
    fn size_at_saturates_instead_of_overflowing() {
        let range = SliderRange::new(u16::MAX, u16::MAX);
        let (min, max) = range.size_at(u32::MAX);
        assert_eq!(min.bytes(), i64::MAX);
        assert_eq!(max.bytes(), i64::MAX);
        assert_eq!(max.to_human(), "8EB");
    }
}
