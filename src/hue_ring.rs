//! Hue ring component
//!
//! A circle stroked with a full hue sweep and a thumb riding on it. Dragging
//! anywhere in the ring's box points the thumb at the pointer. Each event
//! recomputes an absolute angle from the box center; there is no unwrapping,
//! so a drag through the center can jump to the opposite side.

use std::cell::{Cell, RefCell};
use std::f32::consts::TAU;
use std::rc::Rc;

use huepick_ui::{
    Bounds, Callback, Color, DragState, Event, EventResult, GradientStop, MouseButton, Point,
    Renderer, Shader, Size, Subscription, TweenedValue, ValueController, ValueReader, Widget,
};
use web_time::Instant;

use crate::color::Hsv;
use crate::config::CircleConfig;
use crate::error::PickerError;
use crate::math::{angle_from_pointer, normalize_angle, point_on_circle, radians_to_degrees};
use crate::slider::{PRESSED_SCALE, PRESS_DURATION, THUMB_OUTLINE_WIDTH};

/// Red, yellow, green, cyan, blue, magenta and back to red.
pub fn hue_sweep_stops() -> Vec<GradientStop> {
    GradientStop::evenly_spaced(&[
        Color::RED,
        Color::YELLOW,
        Color::GREEN,
        Color::CYAN,
        Color::BLUE,
        Color::MAGENTA,
        Color::RED,
    ])
}

/// Circular hue selector.
pub struct HueRing {
    config: CircleConfig,
    /// Radians in [0, 2π)
    angle: ValueController,
    press: TweenedValue,
    drag: DragState,
    on_changed: Rc<RefCell<Callback<f32>>>,
    dirty: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl HueRing {
    /// Mount a ring with the thumb at `angle` radians.
    pub fn new(angle: f32, config: CircleConfig) -> Result<Self, PickerError> {
        config.validate()?;

        let angle = ValueController::new(normalize_angle(angle), 0.0, TAU)?;
        let press = ValueController::new(1.0, PRESSED_SCALE, 1.0)?;
        let on_changed: Rc<RefCell<Callback<f32>>> = Rc::default();
        let dirty = Rc::new(Cell::new(true));

        let mut subscriptions = Vec::with_capacity(3);
        subscriptions.push(angle.subscribe({
            let on_changed = Rc::clone(&on_changed);
            move |radians| {
                log::trace!("HueRing: angle={}", radians);
                on_changed.borrow().call(radians);
            }
        }));
        for source in [angle.reader(), press.reader()] {
            let dirty = Rc::clone(&dirty);
            subscriptions.push(source.subscribe(move |_| dirty.set(true)));
        }

        Ok(Self {
            config,
            angle,
            press: TweenedValue::new(press),
            drag: DragState::default(),
            on_changed,
            dirty,
            subscriptions,
        })
    }

    /// Set the change callback, invoked with every new angle in radians.
    pub fn on_changed<F>(self, handler: F) -> Self
    where
        F: Fn(f32) + 'static,
    {
        *self.on_changed.borrow_mut() = Callback::new(handler);
        self
    }

    pub fn config(&self) -> &CircleConfig {
        &self.config
    }

    /// Current angle in radians, `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.angle.value()
    }

    /// Current hue in degrees, `[0, 360)`.
    pub fn hue_degrees(&self) -> f32 {
        radians_to_degrees(self.angle())
    }

    /// Read-only handle to the angle.
    pub fn angle_reader(&self) -> ValueReader {
        self.angle.reader()
    }

    /// Move the thumb programmatically. Notifies like a drag would.
    pub fn set_angle(&self, radians: f32) -> bool {
        self.angle.set(normalize_angle(radians))
    }

    /// Current thumb press scale in `[0.9, 1]`.
    pub fn press_scale(&self) -> f32 {
        self.press.value()
    }

    /// Radius of the ring centerline.
    pub fn ring_radius(&self, bounds: Bounds) -> f32 {
        ((bounds.size().min_side() - self.config.thumb_size) / 2.0).max(0.0)
    }

    /// Center of the thumb within `bounds`.
    pub fn thumb_center(&self, bounds: Bounds) -> Point {
        let radius = self.ring_radius(bounds);
        let center = bounds.center();
        let origin = center - Point::new(radius, radius);
        origin + point_on_circle(self.angle(), radius)
    }

    /// Fully saturated color of the current hue.
    pub fn thumb_color(&self) -> Color {
        Hsv::pure(self.hue_degrees()).to_color()
    }

    /// Whether anything changed since the last call.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    fn update_from_pointer(&mut self, position: Point, bounds: Bounds) {
        let center = bounds.center();
        let angle = angle_from_pointer(position.x, position.y, center.x, center.y);
        self.angle.set(angle % TAU);
    }
}

impl Widget for HueRing {
    fn layout(&mut self, _available: Size) -> Size {
        self.config.size
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let center = bounds.center();
        renderer.stroke_circle(
            center,
            self.ring_radius(bounds),
            self.config.stroke_width,
            Shader::SweepGradient {
                center,
                stops: hue_sweep_stops(),
            },
        );

        let thumb = self.thumb_center(bounds);
        let radius = self.config.thumb_size / 2.0 * self.press_scale();
        renderer.fill_circle(thumb, radius, self.thumb_color());
        renderer.stroke_circle(
            thumb,
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
                log::debug!("HueRing: started dragging");
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
                log::debug!("HueRing: stopped dragging");
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
        if self.subscriptions.is_empty() && self.angle.is_disposed() {
            return;
        }
        log::debug!("HueRing: unmounting");
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
        self.press.stop();
        self.angle.dispose();
        self.press.controller().dispose();
        self.drag.stop_drag();
    }
}

impl Drop for HueRing {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for HueRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HueRing")
            .field("angle", &self.angle())
            .field("press_scale", &self.press_scale())
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_ui::DrawCommand;
    use std::f32::consts::{FRAC_PI_2, PI};
    use std::time::Duration;

    const EPS: f32 = 1e-4;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 320.0, 320.0)
    }

    fn recording_ring(angle: f32) -> (HueRing, Rc<RefCell<Vec<f32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let ring = HueRing::new(angle, CircleConfig::default())
            .unwrap()
            .on_changed(move |a| sink.borrow_mut().push(a));
        (ring, seen)
    }

    #[test]
    fn test_initial_angle_is_normalized() {
        let (ring, seen) = recording_ring(-FRAC_PI_2);
        assert!((ring.angle() - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_press_points_thumb_at_pointer() {
        let (mut ring, seen) = recording_ring(PI);
        let result = ring.on_event(&Event::press(300.0, 160.0), bounds());
        assert_eq!(result, EventResult::Captured);
        assert_eq!(ring.angle(), 0.0);
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn test_drag_crosses_zero_without_unwrapping() {
        let (mut ring, seen) = recording_ring(0.0);
        // Just above the positive x axis is slightly below 2π
        ring.on_event(&Event::press(300.0, 150.0), bounds());
        let before = ring.angle();
        assert!(before > 3.0 * FRAC_PI_2 && before < TAU);

        ring.on_event(&Event::move_to(300.0, 170.0), bounds());
        let after = ring.angle();
        assert!(after > 0.0 && after < FRAC_PI_2);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_drag_through_center_jumps() {
        let (mut ring, _) = recording_ring(0.0);
        ring.on_event(&Event::press(170.0, 160.0), bounds());
        assert_eq!(ring.angle(), 0.0);
        ring.on_event(&Event::move_to(150.0, 160.0), bounds());
        assert!((ring.angle() - PI).abs() < EPS);
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let (mut ring, seen) = recording_ring(0.0);
        let result = ring.on_event(&Event::press(400.0, 160.0), bounds());
        assert_eq!(result, EventResult::Ignored);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_thumb_center_on_ring() {
        let (ring, _) = recording_ring(FRAC_PI_2);
        let thumb = ring.thumb_center(bounds());
        // radius (320 - 32) / 2 = 144, straight below the center
        assert!((thumb.x - 160.0).abs() < EPS);
        assert!((thumb.y - 304.0).abs() < EPS);
        assert!((thumb.distance(bounds().center()) - 144.0).abs() < EPS);
    }

    #[test]
    fn test_draw_sweep_gradient_and_thumb() {
        let (ring, _) = recording_ring(0.0);
        let mut renderer = Renderer::new();
        ring.draw(&mut renderer, bounds());

        let DrawCommand::StrokeCircle {
            radius,
            width,
            shader,
            ..
        } = &renderer.commands()[0]
        else {
            panic!("expected ring stroke first");
        };
        assert_eq!(*radius, 144.0);
        assert_eq!(*width, 6.0);
        let stops = shader.stops();
        assert_eq!(stops.len(), 7);
        assert_eq!(stops[0].color, Color::RED);
        assert_eq!(stops[3].color, Color::CYAN);
        assert_eq!(stops[6].color, Color::RED);

        let DrawCommand::FillCircle { shader, radius, .. } = &renderer.commands()[1] else {
            panic!("expected thumb fill");
        };
        assert_eq!(*radius, 16.0);
        assert_eq!(shader.solid_color(), Some(Color::RED));
    }

    #[test]
    fn test_press_scale_animates() {
        let (mut ring, _) = recording_ring(0.0);
        ring.on_event(&Event::press(300.0, 160.0), bounds());
        assert!(!ring.tick(Instant::now() + Duration::from_millis(100)));
        assert_eq!(ring.press_scale(), PRESSED_SCALE);
        ring.on_event(&Event::release(300.0, 160.0), bounds());
        ring.tick(Instant::now() + Duration::from_millis(100));
        assert_eq!(ring.press_scale(), 1.0);
    }

    #[test]
    fn test_set_angle_wraps() {
        let (ring, seen) = recording_ring(0.0);
        assert!(ring.set_angle(TAU + FRAC_PI_2));
        assert!((ring.angle() - FRAC_PI_2).abs() < EPS);
        assert_eq!(seen.borrow().len(), 1);
    }
}
