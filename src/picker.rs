//! Color picker composite
//!
//! Owns the canonical hue, saturation and value controllers and composes a
//! [`HueRing`] with two [`ChannelSlider`]s. Children report their own
//! angle or fraction; the picker writes it into the matching controller,
//! and any controller change derives a new color for the external callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use huepick_ui::{
    Bounds, Callback, Event, EventResult, Renderer, Size, Subscription, ValueController,
    ValueReader, Widget,
};
use web_time::Instant;

use crate::color::{Hsv, Rgb};
use crate::config::{CircleConfig, PickerConfig, SliderConfig};
use crate::error::PickerError;
use crate::hue_ring::HueRing;
use crate::math::{degrees_to_radians, radians_to_degrees};
use crate::slider::{ChannelSlider, SliderChannel};

/// Construction parameters for a [`ColorPicker`].
#[derive(Debug, Default)]
pub struct PickerOptions {
    /// Seeds hue, saturation and value at mount
    pub initial_color: Rgb,
    pub circle: CircleConfig,
    pub slider: SliderConfig,
    /// Invoked with the derived color on every user-driven change
    pub on_changed: Callback<Rgb>,
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_color(mut self, color: Rgb) -> Self {
        self.initial_color = color;
        self
    }

    pub fn circle(mut self, circle: CircleConfig) -> Self {
        self.circle = circle;
        self
    }

    pub fn slider(mut self, slider: SliderConfig) -> Self {
        self.slider = slider;
        self
    }

    pub fn on_changed<F>(mut self, handler: F) -> Self
    where
        F: Fn(Rgb) + 'static,
    {
        self.on_changed = Callback::new(handler);
        self
    }
}

impl From<&PickerConfig> for PickerOptions {
    fn from(config: &PickerConfig) -> Self {
        Self {
            initial_color: config.initial_color,
            circle: config.circle,
            slider: config.slider,
            on_changed: Callback::none(),
        }
    }
}

/// Hue ring plus saturation and value sliders.
pub struct ColorPicker {
    circle: CircleConfig,
    slider: SliderConfig,
    /// Degrees in [0, 360]
    hue: ValueController,
    saturation: ValueController,
    value: ValueController,
    ring: HueRing,
    saturation_slider: ChannelSlider,
    value_slider: ChannelSlider,
    on_changed: Rc<RefCell<Callback<Rgb>>>,
    /// Set while applying an external reset
    silent: Rc<Cell<bool>>,
    redraw: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
    mounted: bool,
}

impl ColorPicker {
    /// Mount a picker. Fails on invalid configuration.
    ///
    /// The external callback is not invoked for the initial color.
    pub fn new(options: PickerOptions) -> Result<Self, PickerError> {
        let PickerOptions {
            initial_color,
            circle,
            slider,
            on_changed,
        } = options;
        circle.validate()?;
        slider.validate()?;

        let seed = initial_color.to_hsv();
        let hue = ValueController::new(seed.hue, 0.0, 360.0)?;
        let saturation = ValueController::new(seed.saturation, 0.0, 1.0)?;
        let value = ValueController::new(seed.value, 0.0, 1.0)?;

        let ring = HueRing::new(degrees_to_radians(seed.hue), circle)?.on_changed({
            let hue = hue.clone();
            move |radians| {
                hue.set(radians_to_degrees(radians));
            }
        });
        let saturation_slider = ChannelSlider::new(
            SliderChannel::Saturation,
            seed.saturation,
            hue.reader(),
            slider,
        )?
        .on_changed({
            let saturation = saturation.clone();
            move |fraction| {
                saturation.set(fraction);
            }
        });
        let value_slider =
            ChannelSlider::new(SliderChannel::Value, seed.value, hue.reader(), slider)?
                .on_changed({
                    let value = value.clone();
                    move |fraction| {
                        value.set(fraction);
                    }
                });

        let on_changed = Rc::new(RefCell::new(on_changed));
        let silent = Rc::new(Cell::new(false));
        let redraw = Rc::new(Cell::new(true));

        let mut subscriptions = Vec::with_capacity(3);
        for source in [&hue, &saturation, &value] {
            let (h, s, v) = (hue.reader(), saturation.reader(), value.reader());
            let on_changed = Rc::clone(&on_changed);
            let silent = Rc::clone(&silent);
            let redraw = Rc::clone(&redraw);
            subscriptions.push(source.subscribe(move |_| {
                redraw.set(true);
                if silent.get() {
                    return;
                }
                let color = Hsv::new(h.value(), s.value(), v.value()).to_rgb();
                log::trace!("ColorPicker: color={}", color);
                on_changed.borrow().call(color);
            }));
        }

        log::debug!(
            "ColorPicker: mounted with {} (h={}, s={}, v={})",
            initial_color,
            seed.hue,
            seed.saturation,
            seed.value
        );

        Ok(Self {
            circle,
            slider,
            hue,
            saturation,
            value,
            ring,
            saturation_slider,
            value_slider,
            on_changed,
            silent,
            redraw,
            subscriptions,
            mounted: true,
        })
    }

    /// Mount a picker from an imported configuration.
    pub fn from_config(config: &PickerConfig) -> Result<Self, PickerError> {
        Self::new(PickerOptions::from(config))
    }

    /// Replace the external change callback.
    pub fn on_changed<F>(self, handler: F) -> Self
    where
        F: Fn(Rgb) + 'static,
    {
        *self.on_changed.borrow_mut() = Callback::new(handler);
        self
    }

    /// Current color in HSV.
    pub fn hsv(&self) -> Hsv {
        Hsv::new(
            self.hue.value(),
            self.saturation.value(),
            self.value.value(),
        )
    }

    /// Current derived color.
    pub fn color(&self) -> Rgb {
        self.hsv().to_rgb()
    }

    /// Hue in degrees, read-only.
    pub fn hue_reader(&self) -> ValueReader {
        self.hue.reader()
    }

    pub fn saturation_reader(&self) -> ValueReader {
        self.saturation.reader()
    }

    pub fn value_reader(&self) -> ValueReader {
        self.value.reader()
    }

    pub fn ring(&self) -> &HueRing {
        &self.ring
    }

    pub fn saturation_slider(&self) -> &ChannelSlider {
        &self.saturation_slider
    }

    pub fn value_slider(&self) -> &ChannelSlider {
        &self.value_slider
    }

    pub fn circle_config(&self) -> &CircleConfig {
        &self.circle
    }

    pub fn slider_config(&self) -> &SliderConfig {
        &self.slider
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Move every control to `color` without invoking the external callback.
    ///
    /// Grays and black carry no hue, so the ring keeps its angle for them.
    /// Returns whether anything moved. Does nothing after unmount.
    pub fn set_color(&self, color: Rgb) -> bool {
        if !self.mounted {
            return false;
        }
        let target = color.to_hsv();
        let hue = if target.saturation == 0.0 || target.value == 0.0 {
            self.hue.value()
        } else {
            target.hue
        };

        self.silent.set(true);
        let mut changed = self.ring.set_angle(degrees_to_radians(hue));
        // Snap to the exact degrees the radians round trip may have missed
        changed |= self.hue.set(hue);
        changed |= self.saturation_slider.set_fraction(target.saturation);
        changed |= self.value_slider.set_fraction(target.value);
        self.silent.set(false);

        log::debug!("ColorPicker: reset to {} (changed={})", color, changed);
        changed
    }

    /// Bounds of the saturation and value sliders inside the picker bounds.
    ///
    /// The pair is centered in the ring box, saturation on top, separated
    /// by the circle config's `space_height`.
    pub fn slider_bounds(&self, bounds: Bounds) -> [Bounds; 2] {
        let height = self.slider.height();
        let total = height * 2.0 + self.circle.space_height;
        let center = bounds.center();
        let x = center.x - self.slider.width / 2.0;
        let top = center.y - total / 2.0;
        [
            Bounds::new(x, top, self.slider.width, height),
            Bounds::new(
                x,
                top + height + self.circle.space_height,
                self.slider.width,
                height,
            ),
        ]
    }

    /// Whether anything visible changed since the last call.
    pub fn take_redraw(&self) -> bool {
        let own = self.redraw.replace(false);
        let ring = self.ring.take_redraw();
        let saturation = self.saturation_slider.take_redraw();
        let value = self.value_slider.take_redraw();
        own | ring | saturation | value
    }
}

impl Widget for ColorPicker {
    fn layout(&mut self, _available: Size) -> Size {
        self.circle.size
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let [saturation_bounds, value_bounds] = self.slider_bounds(bounds);
        self.ring.draw(renderer, bounds);
        self.saturation_slider.draw(renderer, saturation_bounds);
        self.value_slider.draw(renderer, value_bounds);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult {
        if !self.mounted {
            return EventResult::Ignored;
        }

        // Sliders sit on top of the ring and get first pick
        let [saturation_bounds, value_bounds] = self.slider_bounds(bounds);
        if self
            .saturation_slider
            .on_event(event, saturation_bounds)
            .is_captured()
        {
            return EventResult::Captured;
        }
        if self.value_slider.on_event(event, value_bounds).is_captured() {
            return EventResult::Captured;
        }
        self.ring.on_event(event, bounds)
    }

    fn tick(&mut self, now: Instant) -> bool {
        let ring = self.ring.tick(now);
        let saturation = self.saturation_slider.tick(now);
        let value = self.value_slider.tick(now);
        ring | saturation | value
    }

    fn has_active_drag(&self) -> bool {
        self.ring.has_active_drag()
            || self.saturation_slider.has_active_drag()
            || self.value_slider.has_active_drag()
    }

    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        log::debug!("ColorPicker: unmounting");

        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
        self.ring.unmount();
        self.saturation_slider.unmount();
        self.value_slider.unmount();
        for controller in [&self.hue, &self.saturation, &self.value] {
            controller.dispose();
        }
    }
}

impl Drop for ColorPicker {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("hsv", &self.hsv())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_ui::DrawCommand;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 320.0, 320.0)
    }

    #[test]
    fn test_default_seed_is_red() {
        let picker = ColorPicker::new(PickerOptions::default()).unwrap();
        assert_eq!(picker.color(), Rgb::RED);
        assert_eq!(picker.hsv(), Hsv::new(0.0, 1.0, 1.0));
        assert!(picker.is_mounted());
    }

    #[test]
    fn test_invalid_config_prevents_mount() {
        let options = PickerOptions::new().slider(SliderConfig::new().width(f32::NAN));
        assert!(matches!(
            ColorPicker::new(options),
            Err(PickerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_slider_layout_centered_and_stacked() {
        let picker = ColorPicker::new(PickerOptions::default()).unwrap();
        let [saturation, value] = picker.slider_bounds(bounds());
        assert_eq!(saturation, Bounds::new(70.0, 110.0, 180.0, 26.0));
        assert_eq!(value, Bounds::new(70.0, 184.0, 180.0, 26.0));
    }

    #[test]
    fn test_layout_uses_circle_size() {
        let mut picker = ColorPicker::new(
            PickerOptions::new().circle(CircleConfig::new().size(Size::new(400.0, 300.0))),
        )
        .unwrap();
        assert_eq!(picker.layout(Size::new(1000.0, 1000.0)), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_draw_layers_ring_below_sliders() {
        let picker = ColorPicker::new(PickerOptions::default()).unwrap();
        let mut renderer = Renderer::new();
        picker.draw(&mut renderer, bounds());

        let commands = renderer.commands();
        // ring stroke, ring thumb fill + outline, then two sliders of three each
        assert_eq!(commands.len(), 9);
        assert!(matches!(commands[0], DrawCommand::StrokeCircle { .. }));
        assert!(matches!(commands[3], DrawCommand::FillRoundedRect { .. }));
        assert!(matches!(commands[6], DrawCommand::FillRoundedRect { .. }));
    }

    #[test]
    fn test_set_color_is_silent() {
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let picker = ColorPicker::new(PickerOptions::default())
            .unwrap()
            .on_changed(move |_| sink.set(sink.get() + 1));

        assert!(picker.set_color(Rgb::BLUE));
        assert_eq!(picker.hsv(), Hsv::new(240.0, 1.0, 1.0));
        assert_eq!(picker.color(), Rgb::BLUE);
        assert_eq!(calls.get(), 0);
        assert!(!picker.set_color(Rgb::BLUE));
    }

    #[test]
    fn test_set_color_gray_keeps_hue() {
        let picker =
            ColorPicker::new(PickerOptions::new().initial_color(Rgb::GREEN)).unwrap();
        picker.set_color(Rgb::new(128, 128, 128));
        let hsv = picker.hsv();
        assert_eq!(hsv.hue, 120.0);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(picker.color(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_redraw_flag_tracks_changes() {
        let picker = ColorPicker::new(PickerOptions::default()).unwrap();
        assert!(picker.take_redraw());
        assert!(!picker.take_redraw());
        picker.set_color(Rgb::WHITE);
        assert!(picker.take_redraw());
    }

    #[test]
    fn test_unmount_detaches_everything() {
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let mut picker = ColorPicker::new(PickerOptions::default())
            .unwrap()
            .on_changed(move |_| sink.set(sink.get() + 1));
        let hue = picker.hue_reader();

        picker.unmount();
        assert!(!picker.is_mounted());
        assert_eq!(
            picker.on_event(&Event::press(300.0, 160.0), bounds()),
            EventResult::Ignored
        );
        assert!(!picker.set_color(Rgb::BLUE));
        assert_eq!(calls.get(), 0);
        assert_eq!(hue.value(), 0.0);
    }
}
