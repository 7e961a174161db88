// crates/ports/src/display.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use quality_range_shared_kernel::Result;

/// The four display locations associated with one slider instance. Variant
/// names mirror the page's element names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplaySlot {
    #[serde(rename = "thirtyMinuteMinSize")]
    ThirtyMinuteMin,
    #[serde(rename = "thirtyMinuteMaxSize")]
    ThirtyMinuteMax,
    #[serde(rename = "sixtyMinuteMinSize")]
    SixtyMinuteMin,
    #[serde(rename = "sixtyMinuteMaxSize")]
    SixtyMinuteMax,
}

impl DisplaySlot {
    pub const ALL: [Self; 4] = [
        Self::ThirtyMinuteMin,
        Self::ThirtyMinuteMax,
        Self::SixtyMinuteMin,
        Self::SixtyMinuteMax,
    ];

    /// Element name the page uses for this slot.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ThirtyMinuteMin => "thirtyMinuteMinSize",
            Self::ThirtyMinuteMax => "thirtyMinuteMaxSize",
            Self::SixtyMinuteMin => "sixtyMinuteMinSize",
            Self::SixtyMinuteMax => "sixtyMinuteMaxSize",
        }
    }
}

impl fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output targets owned by the page: the formatted-size display slots and the
/// hidden form field holding the encoded range.
pub trait QualitySink: Send + Sync {
    fn set_display(&self, slot: DisplaySlot, text: &str) -> Result<()>;
    fn set_range_field(&self, encoded: &str) -> Result<()>;
}
