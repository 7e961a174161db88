//! # Ports
//!
//! Interface definitions for the surrounding settings page.
//!
//! - [`display`]: the sink a slider instance pushes its derived strings into —
//!   four named display slots plus the hidden range field.
//!
//! These ports keep the use-case layer independent of any concrete page or
//! DOM binding.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod display;

pub use display::{DisplaySlot, QualitySink};
