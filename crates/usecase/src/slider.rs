// crates/usecase/src/slider.rs
use quality_range_ports::{DisplaySlot, QualitySink};
use quality_range_shared_kernel::{EncodedRange, ProfileId, Result, SliderRange};

use crate::dto::SlideOutput;

/// Handles one slide event: projects the range into display strings and the
/// encoded field value, then pushes them through the page sink.
///
/// Runs on every intermediate drag position, so it stays pure arithmetic and
/// string formatting. Stateless and idempotent.
pub struct SlideRange<'a> {
    sink: &'a dyn QualitySink,
}

impl<'a> SlideRange<'a> {
    pub fn new(sink: &'a dyn QualitySink) -> Self {
        Self { sink }
    }

    pub fn run(&self, id: &ProfileId, range: SliderRange) -> Result<SlideOutput> {
        let output = project(id, range);
        self.sink
            .set_display(DisplaySlot::ThirtyMinuteMin, &output.thirty_minute_min)?;
        self.sink
            .set_display(DisplaySlot::ThirtyMinuteMax, &output.thirty_minute_max)?;
        self.sink
            .set_display(DisplaySlot::SixtyMinuteMin, &output.sixty_minute_min)?;
        self.sink
            .set_display(DisplaySlot::SixtyMinuteMax, &output.sixty_minute_max)?;
        self.sink.set_range_field(&output.encoded)?;
        Ok(output)
    }
}

/// Computes the five strings for a slider position without touching any sink.
pub fn project(id: &ProfileId, range: SliderRange) -> SlideOutput {
    let (thirty_min, thirty_max) = range.size_at(30);
    let (sixty_min, sixty_max) = range.size_at(60);
    SlideOutput {
        thirty_minute_min: thirty_min.to_human(),
        thirty_minute_max: thirty_max.to_human(),
        sixty_minute_min: sixty_min.to_human(),
        sixty_minute_max: sixty_max.to_human(),
        encoded: EncodedRange::new(id.clone(), range).to_string(),
    }
}
