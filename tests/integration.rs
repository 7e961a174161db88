// tests/integration.rs
use std::collections::HashMap;
use std::sync::Mutex;

use quality_range::{
    DisplaySlot, PresentationError, QualityRangeError, QualitySink, Result, SizeSliderWidget,
    SliderConfig,
};

/// In-memory stand-in for the settings page around one slider.
#[derive(Default)]
struct PageSink {
    displays: Mutex<HashMap<DisplaySlot, String>>,
    field: Mutex<Option<String>>,
}

impl QualitySink for PageSink {
    fn set_display(&self, slot: DisplaySlot, text: &str) -> Result<()> {
        self.displays.lock().unwrap().insert(slot, text.to_string());
        Ok(())
    }

    fn set_range_field(&self, encoded: &str) -> Result<()> {
        *self.field.lock().unwrap() = Some(encoded.to_string());
        Ok(())
    }
}

#[test]
fn drag_updates_displays_and_field() {
    let sink = PageSink::default();
    let widget = SizeSliderWidget::new("7", SliderConfig::default(), &sink);

    widget.on_slide(10, 200).expect("slide succeeds");

    let displays = sink.displays.lock().unwrap();
    assert_eq!(displays[&DisplaySlot::ThirtyMinuteMin], "300MB");
    assert_eq!(displays[&DisplaySlot::ThirtyMinuteMax], "5.86GB");
    assert_eq!(displays[&DisplaySlot::SixtyMinuteMin], "600MB");
    assert_eq!(displays[&DisplaySlot::SixtyMinuteMax], "11.72GB");
    assert_eq!(sink.field.lock().unwrap().as_deref(), Some("7:10-200"));
}

#[test]
fn repeated_drags_overwrite_previous_values() {
    let sink = PageSink::default();
    let widget = SizeSliderWidget::new("3", SliderConfig::default(), &sink);

    widget.on_slide(10, 200).expect("slide succeeds");
    widget.on_slide(0, 256).expect("slide succeeds");

    let displays = sink.displays.lock().unwrap();
    assert_eq!(displays[&DisplaySlot::ThirtyMinuteMin], "Unlimited");
    assert_eq!(displays[&DisplaySlot::SixtyMinuteMax], "15GB");
    assert_eq!(sink.field.lock().unwrap().as_deref(), Some("3:0-256"));
}

#[test]
fn profile_id_passes_through_unmodified() {
    let sink = PageSink::default();
    let widget = SizeSliderWidget::new("hd:bluray", SliderConfig::default(), &sink);
    widget.on_slide(1, 2).expect("slide succeeds");
    assert_eq!(sink.field.lock().unwrap().as_deref(), Some("hd:bluray:1-2"));
}

struct FailingSink;

impl QualitySink for FailingSink {
    fn set_display(&self, slot: DisplaySlot, _text: &str) -> Result<()> {
        Err(PresentationError::DisplayUpdateFailed {
            slot: slot.to_string(),
            details: "element detached".to_string(),
        }
        .into())
    }

    fn set_range_field(&self, _encoded: &str) -> Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failures_propagate() {
    let sink = FailingSink;
    let widget = SizeSliderWidget::new("7", SliderConfig::default(), &sink);
    let err = widget.on_slide(10, 200).unwrap_err();
    assert!(matches!(err, QualityRangeError::Presentation(_)));
}
