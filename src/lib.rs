//! Support library for a quality-profile size-range slider.
//!
//! A settings page renders one dual-handle slider per quality profile; the
//! handles pick minimum and maximum file-size thresholds in megabytes per
//! minute of runtime. Every drag step projects the pair into four
//! human-readable size displays (30- and 60-minute runtimes) and one encoded
//! `"<id>:<low>-<high>"` form-field value for the backend.
//!
//! The page supplies a [`QualitySink`] for the output targets and constructs
//! one [`SizeSliderWidget`] per slider element:
//!
//! ```
//! use quality_range::{QualitySink, DisplaySlot, SizeSliderWidget, SliderConfig};
//! # use std::sync::Mutex;
//! # #[derive(Default)]
//! # struct PageSink { field: Mutex<Option<String>> }
//! # impl QualitySink for PageSink {
//! #     fn set_display(&self, _: DisplaySlot, _: &str) -> quality_range::Result<()> { Ok(()) }
//! #     fn set_range_field(&self, encoded: &str) -> quality_range::Result<()> {
//! #         *self.field.lock().unwrap() = Some(encoded.to_string());
//! #         Ok(())
//! #     }
//! # }
//!
//! let sink = PageSink::default();
//! let widget = SizeSliderWidget::new("7", SliderConfig::default(), &sink);
//! widget.on_slide(10, 200)?;
//! assert_eq!(sink.field.lock().unwrap().as_deref(), Some("7:10-200"));
//! # Ok::<(), quality_range::QualityRangeError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod widget;

pub use config::SliderConfig;
pub use widget::SizeSliderWidget;

pub use quality_range_ports::{DisplaySlot, QualitySink};
pub use quality_range_shared_kernel::{
    DomainError, EncodedRange, PresentationError, ProfileId, QualityRangeError, Result,
    SizeValue, SliderRange,
};
pub use quality_range_usecase::{SlideOutput, SlideRange, project};
