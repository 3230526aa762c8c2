//! Pointer-driven scenarios against a default-sized picker.

use std::cell::RefCell;
use std::rc::Rc;

use huepick_ui::{Bounds, Event, EventResult, Widget};

use crate::config::{CircleConfig, SliderConfig};
use crate::error::PickerError;
use crate::picker::{ColorPicker, PickerOptions};
use crate::Rgb;

/// Mount a picker that records every reported color.
fn recording_picker(initial: Rgb) -> (ColorPicker, Rc<RefCell<Vec<Rgb>>>) {
    let emitted: Rc<RefCell<Vec<Rgb>>> = Rc::default();
    let sink = Rc::clone(&emitted);
    let picker = ColorPicker::new(
        PickerOptions::new()
            .initial_color(initial)
            .on_changed(move |color| sink.borrow_mut().push(color)),
    )
    .unwrap();
    (picker, emitted)
}

fn bounds() -> Bounds {
    Bounds::new(0.0, 0.0, 320.0, 320.0)
}

#[test]
fn test_initial_color_seeds_controllers_silently() {
    let (picker, emitted) = recording_picker(Rgb::GREEN);
    assert_eq!(picker.hue_reader().value(), 120.0);
    assert_eq!(picker.saturation_reader().value(), 1.0);
    assert_eq!(picker.value_reader().value(), 1.0);
    assert_eq!(picker.saturation_slider().fraction(), 1.0);
    assert_eq!(picker.value_slider().fraction(), 1.0);
    assert!(emitted.borrow().is_empty());
}

#[test]
fn test_ring_press_reports_red() {
    let (mut picker, emitted) = recording_picker(Rgb::BLUE);

    let result = picker.on_event(&Event::press(300.0, 160.0), bounds());
    assert_eq!(result, EventResult::Captured);
    assert!(picker.has_active_drag());
    assert_eq!(picker.ring().angle(), 0.0);
    assert_eq!(picker.hue_reader().value(), 0.0);
    assert_eq!(emitted.borrow().as_slice(), &[Rgb::RED]);

    picker.on_event(&Event::release(300.0, 160.0), bounds());
    assert!(!picker.has_active_drag());
}

#[test]
fn test_ring_drag_follows_pointer() {
    let (mut picker, emitted) = recording_picker(Rgb::RED);

    picker.on_event(&Event::press(300.0, 160.0), bounds());
    // Straight below the center is a quarter turn on a y-down screen
    picker.on_event(&Event::move_to(160.0, 300.0), bounds());
    assert!((picker.hue_reader().value() - 90.0).abs() < 1e-3);

    picker.on_event(&Event::release(160.0, 300.0), bounds());
    let last = *emitted.borrow().last().unwrap();
    assert_eq!(last, picker.color());
    assert_eq!((last.g, last.b), (255, 0));
    assert!((127..=128).contains(&last.r));
}

#[test]
fn test_value_slider_press_at_left_edge_reports_black() {
    let (mut picker, emitted) = recording_picker(Rgb::RED);

    let result = picker.on_event(&Event::press(70.0, 197.0), bounds());
    assert_eq!(result, EventResult::Captured);
    assert!(picker.value_slider().has_active_drag());
    assert!(!picker.ring().has_active_drag());
    assert_eq!(picker.value_reader().value(), 0.0);
    assert_eq!(emitted.borrow().as_slice(), &[Rgb::BLACK]);
}

#[test]
fn test_saturation_slider_drag_toward_white() {
    let (mut picker, emitted) = recording_picker(Rgb::RED);

    picker.on_event(&Event::press(250.0, 123.0), bounds());
    assert!(emitted.borrow().is_empty());
    // Leaving the track keeps the drag and clamps at zero
    picker.on_event(&Event::move_to(0.0, 40.0), bounds());
    picker.on_event(&Event::release(0.0, 40.0), bounds());

    assert_eq!(picker.saturation_reader().value(), 0.0);
    assert_eq!(picker.ring().angle(), 0.0);
    assert_eq!(emitted.borrow().as_slice(), &[Rgb::WHITE]);
}

#[test]
fn test_repeated_slider_position_notifies_once() {
    let (mut picker, emitted) = recording_picker(Rgb::RED);

    picker.on_event(&Event::press(160.0, 123.0), bounds());
    picker.on_event(&Event::move_to(160.0, 123.0), bounds());
    picker.on_event(&Event::move_to(160.0, 130.0), bounds());
    picker.on_event(&Event::release(160.0, 130.0), bounds());

    assert_eq!(emitted.borrow().len(), 1);
    assert_eq!(picker.saturation_reader().value(), 0.5);
}

#[test]
fn test_set_color_does_not_call_back() {
    let (mut picker, emitted) = recording_picker(Rgb::RED);

    assert!(picker.set_color(Rgb::new(0x33, 0x66, 0x99)));
    assert_eq!(picker.color(), Rgb::new(0x33, 0x66, 0x99));
    assert!(emitted.borrow().is_empty());

    // User interaction after a reset reports again
    picker.on_event(&Event::press(70.0, 197.0), bounds());
    assert_eq!(emitted.borrow().as_slice(), &[Rgb::BLACK]);
}

#[test]
fn test_unmount_detaches_callbacks() {
    let (mut picker, emitted) = recording_picker(Rgb::BLUE);
    let hue = picker.hue_reader();

    picker.unmount();
    picker.unmount();
    assert_eq!(
        picker.on_event(&Event::press(300.0, 160.0), bounds()),
        EventResult::Ignored
    );
    assert_eq!(hue.value(), 240.0);
    assert!(emitted.borrow().is_empty());
}

#[test]
fn test_drop_releases_shared_state() {
    let (picker, emitted) = recording_picker(Rgb::RED);
    drop(picker);
    assert_eq!(Rc::strong_count(&emitted), 1);
}

#[test]
fn test_invalid_config_fails_to_mount() {
    let circle = CircleConfig::new().thumb_size(0.0);
    assert!(matches!(
        ColorPicker::new(PickerOptions::new().circle(circle)),
        Err(PickerError::InvalidConfig {
            field: "circle.thumb_size",
            ..
        })
    ));

    let slider = SliderConfig::new().width(10.0);
    assert!(ColorPicker::new(PickerOptions::new().slider(slider)).is_err());
}
