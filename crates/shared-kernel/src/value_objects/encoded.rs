// crates/shared-kernel/src/value_objects/encoded.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ProfileId, SliderRange};
use crate::error::{DomainError, DomainResult};

/// Serialized slider position submitted in the hidden form field.
///
/// Wire format is `"<id>:<low>-<high>"` with decimal bounds, consumed by the
/// server-side save handler; it must be preserved exactly. Rendering and
/// parsing round-trip: parsing splits on the last `:` so ids containing colons
/// survive intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedRange {
    id: ProfileId,
    range: SliderRange,
}

impl EncodedRange {
    pub fn new(id: ProfileId, range: SliderRange) -> Self {
        Self { id, range }
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub const fn range(&self) -> SliderRange {
        self.range
    }
}

impl fmt::Display for EncodedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.id, self.range.low(), self.range.high())
    }
}

impl FromStr for EncodedRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, bounds) = s.rsplit_once(':').ok_or_else(|| {
            DomainError::InvalidEncodedRange {
                value: s.to_string(),
                details: "missing ':' separator".to_string(),
            }
        })?;
        let (low, high) = bounds.split_once('-').ok_or_else(|| {
            DomainError::InvalidEncodedRange {
                value: s.to_string(),
                details: "missing '-' between bounds".to_string(),
            }
        })?;
        let low = parse_bound(low)?;
        let high = parse_bound(high)?;
        Ok(Self::new(ProfileId::from(id), SliderRange::new(low, high)))
    }
}

fn parse_bound(raw: &str) -> DomainResult<u16> {
    raw.parse().map_err(|err| DomainError::InvalidBound {
        value: raw.to_string(),
        details: format!("not a slider position: {err}"),
    })
}
