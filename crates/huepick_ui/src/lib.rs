//! huepick_ui - framework support for the huepick color picker
//!
//! This crate provides the pieces a picker component needs from its host:
//! pointer events, geometry, a recording paint surface, optional callbacks,
//! observable value controllers, and a small tweening utility.

mod callback;
mod controller;
mod event;
mod layout;
mod renderer;
mod tween;
mod widget;

pub use callback::Callback;
pub use controller::{ControllerError, Subscription, ValueController, ValueReader};
pub use event::{DragState, Event, MouseButton};
pub use layout::{Bounds, Point, Size};
pub use renderer::{Color, DrawCommand, GradientStop, Renderer, Shader};
pub use tween::{Easing, Tween, TweenedValue};
pub use widget::{EventResult, Widget};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::Callback;
    pub use crate::controller::{Subscription, ValueController, ValueReader};
    pub use crate::event::{DragState, Event, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::renderer::{Color, Renderer, Shader};
    pub use crate::widget::{EventResult, Widget};
}
