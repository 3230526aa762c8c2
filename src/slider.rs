//! Saturation and value slider component
//!
//! A horizontal track whose fill is a gradient across one HSV channel at the
//! current hue, and a round thumb the user drags along it. The slider owns
//! its fraction in `[0, 1]` and reports every change through `on_changed`;
//! the picker that embeds it decides what the fraction means.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use huepick_ui::{
    Bounds, Callback, Color, DragState, Event, EventResult, GradientStop, MouseButton, Point,
    Renderer, Shader, Size, Subscription, TweenedValue, ValueController, ValueReader, Widget,
};
use web_time::Instant;

use crate::color::Hsv;
use crate::config::SliderConfig;
use crate::error::PickerError;
use crate::math::fraction_from_pointer;

/// Thumb scale while pressed
pub const PRESSED_SCALE: f32 = 0.9;
/// Duration of the press and release squeeze
pub const PRESS_DURATION: Duration = Duration::from_millis(50);
/// Width of the white outline around a thumb
pub const THUMB_OUTLINE_WIDTH: f32 = 2.0;

/// The HSV channel a slider drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderChannel {
    Saturation,
    Value,
}

impl SliderChannel {
    /// Color at `fraction` of this channel for `hue`, with the other
    /// channel held at 1.
    pub fn color_at(self, hue: f32, fraction: f32) -> Color {
        match self {
            SliderChannel::Saturation => Hsv::new(hue, fraction, 1.0).to_color(),
            SliderChannel::Value => Hsv::new(hue, 1.0, fraction).to_color(),
        }
    }

    /// Low, middle and high stops of the track gradient.
    pub fn gradient_stops(self, hue: f32) -> Vec<GradientStop> {
        GradientStop::evenly_spaced(&[
            self.color_at(hue, 0.0),
            self.color_at(hue, 0.5),
            self.color_at(hue, 1.0),
        ])
    }

    pub fn name(self) -> &'static str {
        match self {
            SliderChannel::Saturation => "saturation",
            SliderChannel::Value => "value",
        }
    }
}

/// A slider for one HSV channel.
pub struct ChannelSlider {
    channel: SliderChannel,
    config: SliderConfig,
    /// Shared hue in degrees, read-only
    hue: ValueReader,
    fraction: ValueController,
    press: TweenedValue,
    drag: DragState,
    on_changed: Rc<RefCell<Callback<f32>>>,
    dirty: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl ChannelSlider {
    /// Mount a slider at `fraction`, drawing gradients for the hue in `hue`.
    pub fn new(
        channel: SliderChannel,
        fraction: f32,
        hue: ValueReader,
        config: SliderConfig,
    ) -> Result<Self, PickerError> {
        config.validate()?;

        let fraction = ValueController::new(fraction, 0.0, 1.0)?;
        let press = ValueController::new(1.0, PRESSED_SCALE, 1.0)?;
        let on_changed: Rc<RefCell<Callback<f32>>> = Rc::default();
        let dirty = Rc::new(Cell::new(true));

        let mut subscriptions = Vec::with_capacity(4);
        subscriptions.push(fraction.subscribe({
            let on_changed = Rc::clone(&on_changed);
            move |value| {
                log::trace!("ChannelSlider[{}]: fraction={}", channel.name(), value);
                on_changed.borrow().call(value);
            }
        }));
        for source in [fraction.reader(), press.reader(), hue.clone()] {
            let dirty = Rc::clone(&dirty);
            subscriptions.push(source.subscribe(move |_| dirty.set(true)));
        }

        Ok(Self {
            channel,
            config,
            hue,
            fraction,
            press: TweenedValue::new(press),
            drag: DragState::default(),
            on_changed,
            dirty,
            subscriptions,
        })
    }

    /// Set the change callback, invoked with every new fraction.
    pub fn on_changed<F>(self, handler: F) -> Self
    where
        F: Fn(f32) + 'static,
    {
        *self.on_changed.borrow_mut() = Callback::new(handler);
        self
    }

    pub fn channel(&self) -> SliderChannel {
        self.channel
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current fraction in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.fraction.value()
    }

    /// Read-only handle to the fraction.
    pub fn fraction_reader(&self) -> ValueReader {
        self.fraction.reader()
    }

    /// Move the thumb programmatically. Notifies like a drag would.
    pub fn set_fraction(&self, fraction: f32) -> bool {
        self.fraction.set(fraction)
    }

    /// Current thumb press scale in `[0.9, 1]`.
    pub fn press_scale(&self) -> f32 {
        self.press.value()
    }

    /// Color shown in the thumb.
    pub fn thumb_color(&self) -> Color {
        self.channel.color_at(self.hue.value(), self.fraction())
    }

    /// Center of the thumb within `bounds`.
    pub fn thumb_center(&self, bounds: Bounds) -> Point {
        let offset = self.fraction() * self.config.thumb_travel();
        Point::new(
            bounds.x + offset + self.config.thumb_size / 2.0,
            bounds.center().y,
        )
    }

    /// Whether anything changed since the last call.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    fn update_from_pointer(&mut self, position: Point, bounds: Bounds) {
        let local = bounds.to_local(position);
        self.fraction
            .set(fraction_from_pointer(local.x, self.config.width));
    }
}

impl Widget for ChannelSlider {
    fn layout(&mut self, _available: Size) -> Size {
        Size::new(self.config.width, self.config.height())
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let hue = self.hue.value();
        let center_y = bounds.center().y;
        let stroke = self.config.stroke_width;

        let track = Bounds::new(bounds.x, center_y - stroke / 2.0, self.config.width, stroke);
        renderer.fill_rounded_rect(
            track,
            stroke / 2.0,
            Shader::LinearGradient {
                start: Point::new(track.x, center_y),
                end: Point::new(track.x + track.width, center_y),
                stops: self.channel.gradient_stops(hue),
            },
        );

        let center = self.thumb_center(bounds);
        let radius = self.config.thumb_size / 2.0 * self.press_scale();
        renderer.fill_circle(center, radius, self.thumb_color());
        renderer.stroke_circle(
            center,
            radius,
            THUMB_OUTLINE_WIDTH,
            Shader::Solid(Color::WHITE),
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult {
        match *event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } if bounds.contains(position) => {
                log::debug!("ChannelSlider[{}]: started dragging", self.channel.name());
                self.drag.start_drag(position);
                self.press
                    .animate_to(PRESSED_SCALE, PRESS_DURATION, Instant::now());
                self.update_from_pointer(position, bounds);
                EventResult::Captured
            }

            Event::MouseMoved { position } if self.drag.is_dragging() => {
                self.drag.update_pos(position);
                self.update_from_pointer(position, bounds);
                EventResult::Captured
            }

            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } if self.drag.is_dragging() => {
                log::debug!("ChannelSlider[{}]: stopped dragging", self.channel.name());
                self.drag.stop_drag();
                self.press.animate_to(1.0, PRESS_DURATION, Instant::now());
                EventResult::Captured
            }

            _ => EventResult::Ignored,
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.press.tick(now)
    }

    fn has_active_drag(&self) -> bool {
        self.drag.is_dragging()
    }

    fn unmount(&mut self) {
        if self.subscriptions.is_empty() && self.fraction.is_disposed() {
            return;
        }
        log::debug!("ChannelSlider[{}]: unmounting", self.channel.name());
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
        self.press.stop();
        self.fraction.dispose();
        self.press.controller().dispose();
        self.drag.stop_drag();
    }
}

impl Drop for ChannelSlider {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for ChannelSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSlider")
            .field("channel", &self.channel)
            .field("fraction", &self.fraction())
            .field("press_scale", &self.press_scale())
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}
