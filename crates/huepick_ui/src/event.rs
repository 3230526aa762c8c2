//! Pointer events delivered by the host

use crate::layout::Point;

/// Events that components respond to.
///
/// Positions are in the same coordinate space as the bounds the host
/// passes alongside the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button (or touch) pressed.
    MousePressed { button: MouseButton, position: Point },
    /// Pointer moved.
    MouseMoved { position: Point },
    /// Mouse button (or touch) released.
    MouseReleased { button: MouseButton, position: Point },
}

impl Event {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            Event::MousePressed { position, .. }
            | Event::MouseMoved { position }
            | Event::MouseReleased { position, .. } => position,
        }
    }

    /// Left press at `(x, y)`.
    pub fn press(x: f32, y: f32) -> Self {
        Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    /// Pointer move to `(x, y)`.
    pub fn move_to(x: f32, y: f32) -> Self {
        Event::MouseMoved {
            position: Point::new(x, y),
        }
    }

    /// Left release at `(x, y)`.
    pub fn release(x: f32, y: f32) -> Self {
        Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Drag interaction state for a draggable component
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging with last pointer position
    Dragging { last_pos: Point },
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Get the last drag position if dragging
    pub fn last_pos(&self) -> Option<Point> {
        match self {
            DragState::Dragging { last_pos } => Some(*last_pos),
            DragState::Idle => None,
        }
    }

    /// Start dragging at the given position
    pub fn start_drag(&mut self, pos: Point) {
        *self = DragState::Dragging { last_pos: pos };
    }

    /// Update last position during drag
    pub fn update_pos(&mut self, pos: Point) {
        if let DragState::Dragging { last_pos } = self {
            *last_pos = pos;
        }
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = DragState::Idle;
    }
}
