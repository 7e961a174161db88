// src/config.rs
use serde::{Deserialize, Serialize};

/// Bounds the page renders a slider with, in megabytes per minute of runtime.
///
/// `min <= max` is expected; defaults match the rendered widget (0..=256,
/// step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: u16,
    pub max: u16,
    pub step: u16,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self { min: 0, max: 256, step: 1 }
    }
}

impl SliderConfig {
    /// Clamps a raw handle position into bounds and snaps it down onto the
    /// step grid anchored at `min`.
    pub fn snap(&self, value: u16) -> u16 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 1 {
            return clamped;
        }
        self.min + ((clamped - self.min) / self.step) * self.step
    }
}
