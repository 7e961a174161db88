// crates/shared-kernel/src/value_objects/size.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Magnitude prefixes indexed by power of 1024. Entries above index 9 are
/// placeholder letters, not SI/IEC symbols; they are part of the stored output
/// format and must not be replaced with canonical prefixes.
const SIZE_PREFIXES: [&str; 13] = [
    "", "K", "M", "G", "T", "P", "E", "Z", "Y", "X", "W", "V", "U",
];

/// Highest supported power of 1024; larger inputs render with this prefix.
const MAX_MAGNITUDE: u32 = 12;

/// Byte count for a projected file size. Zero or negative means "no limit".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct SizeValue(i64);

impl SizeValue {
    #[inline]
    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn unlimited() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_unlimited(self) -> bool {
        self.0 <= 0
    }

    /// Power of 1024 selecting the display prefix: `floor(log1024(bytes))`
    /// clamped to [0, MAX_MAGNITUDE]. Zero for unlimited values.
    pub fn magnitude(self) -> u32 {
        let mut rest = if self.0 > 0 { self.0 as u64 } else { 0 };
        let mut t = 0;
        while rest >= 1024 && t < MAX_MAGNITUDE {
            rest /= 1024;
            t += 1;
        }
        t
    }
}

impl From<i64> for SizeValue {
    fn from(bytes: i64) -> Self {
        Self::new(bytes)
    }
}
impl From<SizeValue> for i64 {
    fn from(size: SizeValue) -> Self {
        size.bytes()
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl SizeValue {
    /// Returns the base-2 human readable representation, e.g. `"1.5KB"`,
    /// `"300MB"`, `"11.72GB"`, or `"Unlimited"` for zero and negatives.
    ///
    /// The scaled value is rounded half-up to two decimal places and printed
    /// with trailing zeros trimmed. Total over all inputs.
    pub fn to_human(self) -> String {
        if self.0 <= 0 {
            return "Unlimited".to_string();
        }
        let t = self.magnitude();
        let divisor = 1_u128 << (10 * t);
        // Hundredths of the scaled value, rounded half-up. Exact integer
        // arithmetic; inputs in this branch are always positive.
        let hundredths = (self.0 as u128 * 100 + divisor / 2) / divisor;
        let whole = hundredths / 100;
        let frac = hundredths % 100;
        let prefix = SIZE_PREFIXES[t as usize];
        if frac == 0 {
            format!("{whole}{prefix}B")
        } else if frac % 10 == 0 {
            format!("{whole}.{}{prefix}B", frac / 10)
        } else {
            format!("{whole}.{frac:02}{prefix}B")
        }
    }
}
