//! Component trait and related types

use web_time::Instant;

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// Whether a component consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// The event was not for this component
    #[default]
    Ignored,
    /// The component handled the event; siblings should not see it
    Captured,
}

impl EventResult {
    pub fn is_captured(self) -> bool {
        matches!(self, EventResult::Captured)
    }
}

/// The core trait all picker components implement.
///
/// Mounting is construction; the remaining lifecycle is layout, draw,
/// event handling, per-frame [`tick`](Widget::tick) and
/// [`unmount`](Widget::unmount).
pub trait Widget {
    /// Calculate the size this component wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the component into the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle a pointer event
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult {
        let _ = (event, bounds);
        EventResult::Ignored
    }

    /// Advance animations; returns `true` while more frames are needed
    fn tick(&mut self, now: Instant) -> bool {
        let _ = now;
        false
    }

    /// Check if this component is currently being dragged
    fn has_active_drag(&self) -> bool {
        false
    }

    /// Detach listeners and dispose controllers
    fn unmount(&mut self) {}
}
