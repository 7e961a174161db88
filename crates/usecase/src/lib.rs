//! # Usecase
//!
//! Application layer for the size-range slider: turning a slide event into
//! display strings and the encoded form-field value.

// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod slider;

pub use dto::SlideOutput;
pub use slider::{SlideRange, project};
