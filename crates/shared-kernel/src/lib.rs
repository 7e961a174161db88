// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, PresentationError, PresentationResult, QualityRangeError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{EncodedRange, ProfileId, SliderRange, SizeValue};
