// src/widget.rs
use quality_range_ports::QualitySink;
use quality_range_shared_kernel::{ProfileId, Result, SliderRange};
use quality_range_usecase::{SlideOutput, SlideRange};

use crate::config::SliderConfig;

/// One dual-handle slider on the settings page.
///
/// The page constructs one widget per slider element and injects the sink it
/// wants the derived strings written to; there is no global registration. The
/// widget retains no slider position between events.
pub struct SizeSliderWidget<'a> {
    id: ProfileId,
    config: SliderConfig,
    sink: &'a dyn QualitySink,
}

impl<'a> SizeSliderWidget<'a> {
    pub fn new(
        id: impl Into<ProfileId>,
        config: SliderConfig,
        sink: &'a dyn QualitySink,
    ) -> Self {
        Self { id: id.into(), config, sink }
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub const fn config(&self) -> SliderConfig {
        self.config
    }

    /// Full-span position the page renders before the first drag.
    pub fn initial_range(&self) -> SliderRange {
        SliderRange::new(self.config.min, self.config.max)
    }

    /// Handles one drag step. Raw handle positions are snapped onto the
    /// configured grid and ordered before projection, so malformed input
    /// still produces a deterministic update.
    pub fn on_slide(&self, low: u16, high: u16) -> Result<SlideOutput> {
        let range = SliderRange::new(self.config.snap(low), self.config.snap(high));
        SlideRange::new(self.sink).run(&self.id, range)
    }
}
