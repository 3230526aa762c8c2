//! Callback abstraction for component change handlers
//!
//! Components report value changes through callbacks supplied by their
//! parent. Instead of writing `Option<Box<dyn Fn(T)>>` in every component,
//! they hold a `Callback<T>` which encapsulates the optional handler and
//! checks for its presence before invoking it.
//!
//! # Examples
//!
//! ```
//! use huepick_ui::Callback;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = seen.clone();
//! let on_changed = Callback::new(move |fraction: f32| sink.set(fraction));
//!
//! assert!(on_changed.call(0.25));
//! assert_eq!(seen.get(), 0.25);
//!
//! let unset: Callback<f32> = Callback::none();
//! assert!(!unset.call(0.5));
//! ```

use std::fmt;

/// An optional change handler.
///
/// # Type Parameters
///
/// - `T`: The value passed to the handler (slider fraction, angle, color)
pub struct Callback<T> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> Callback<T> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the handler with `value` if one is set.
    ///
    /// Returns `true` when a handler ran.
    pub fn call(&self, value: T) -> bool {
        match self.f {
            Some(ref f) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_none_does_not_call() {
        let callback: Callback<u8> = Callback::default();
        assert!(callback.is_none());
        assert!(!callback.call(1));
    }

    #[test]
    fn test_calls_handler_with_value() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let callback = Callback::new(move |v: u8| sink.borrow_mut().push(v));

        assert!(callback.is_some());
        assert!(callback.call(3));
        assert!(callback.call(7));
        assert_eq!(*received.borrow(), vec![3, 7]);
    }
}
