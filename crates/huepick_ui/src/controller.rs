//! Bounded, observable scalar values
//!
//! A [`ValueController`] holds one `f32` inside fixed bounds and notifies its
//! subscribers synchronously whenever the stored value actually changes.
//! Components use controllers for everything that moves: slider fractions,
//! the hue angle, and the press-scale animation of a thumb.
//!
//! Controllers are cheap shared handles (`Rc` inside). Cloning a controller
//! yields another handle to the same value, which is how a parent hands a
//! setter to a child callback. Use [`ValueController::reader`] to give out a
//! handle that can observe but not mutate.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;

type Listener = Rc<dyn Fn(f32)>;

/// Errors raised when creating a controller.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ControllerError {
    /// The lower bound is above the upper bound (or a bound is NaN)
    #[error("Invalid bounds: lower {lower} must not exceed upper {upper}")]
    InvalidBounds {
        /// Requested lower bound
        lower: f32,
        /// Requested upper bound
        upper: f32,
    },
}

struct Inner {
    value: f32,
    lower: f32,
    upper: f32,
    revision: u64,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    disposed: bool,
}

impl Inner {
    fn snapshot_listeners(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
    }
}

/// A mutable, bounded, observable scalar.
#[derive(Clone)]
pub struct ValueController {
    inner: Rc<RefCell<Inner>>,
}

impl ValueController {
    /// Create a controller holding `initial` within `[lower, upper]`.
    ///
    /// The initial value is clamped into the bounds; a NaN initial value
    /// starts at `lower`. Fails if `lower > upper` or either bound is NaN.
    pub fn new(initial: f32, lower: f32, upper: f32) -> Result<Self, ControllerError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(ControllerError::InvalidBounds { lower, upper });
        }

        let value = if initial.is_nan() {
            lower
        } else {
            initial.clamp(lower, upper)
        };

        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                lower,
                upper,
                revision: 0,
                next_id: 0,
                listeners: Vec::new(),
                disposed: false,
            })),
        })
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    /// The `(lower, upper)` bounds.
    pub fn bounds(&self) -> (f32, f32) {
        let inner = self.inner.borrow();
        (inner.lower, inner.upper)
    }

    /// Number of stored changes since creation.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Clamp `value` into the bounds and store it.
    ///
    /// Subscribers are notified, in subscription order and before this call
    /// returns, only when the clamped value differs from the stored one.
    /// Returns whether the stored value changed. NaN is ignored.
    pub fn set(&self, value: f32) -> bool {
        if value.is_nan() {
            log::warn!("ValueController: ignoring NaN value");
            return false;
        }

        // Release the borrow before notifying so listeners may set controllers
        let (value, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let clamped = value.clamp(inner.lower, inner.upper);
            if clamped == inner.value {
                return false;
            }
            inner.value = clamped;
            inner.revision += 1;
            (clamped, inner.snapshot_listeners())
        };

        log::trace!(
            "ValueController: value={} notifying {} listener(s)",
            value,
            listeners.len()
        );
        for listener in listeners {
            listener(value);
        }
        true
    }

    /// Register `listener` to be called with every new value.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(f32) + 'static,
    {
        subscribe_inner(&self.inner, Rc::new(listener))
    }

    /// A read-only handle to this controller.
    pub fn reader(&self) -> ValueReader {
        ValueReader {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Detach every listener. Later sets still store values but notify nobody.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        log::debug!(
            "ValueController: disposing with {} listener(s)",
            inner.listeners.len()
        );
        inner.listeners.clear();
        inner.disposed = true;
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }
}

impl fmt::Debug for ValueController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ValueController")
            .field("value", &inner.value)
            .field("bounds", &(inner.lower, inner.upper))
            .field("revision", &inner.revision)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

fn subscribe_inner(inner: &Rc<RefCell<Inner>>, listener: Listener) -> Subscription {
    let mut state = inner.borrow_mut();
    if state.disposed {
        log::warn!("ValueController: subscribe after dispose is ignored");
        return Subscription {
            target: Weak::new(),
            id: 0,
        };
    }
    let id = state.next_id;
    state.next_id += 1;
    state.listeners.push((id, listener));
    Subscription {
        target: Rc::downgrade(inner),
        id,
    }
}

/// Read-only view of a [`ValueController`].
#[derive(Clone)]
pub struct ValueReader {
    inner: Rc<RefCell<Inner>>,
}

impl ValueReader {
    /// Current value of the observed controller.
    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    /// Revision of the observed controller.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Observe changes without gaining write access.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(f32) + 'static,
    {
        subscribe_inner(&self.inner, Rc::new(listener))
    }
}

impl fmt::Debug for ValueReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueReader")
            .field("value", &self.value())
            .finish()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle leaves the listener attached; call
/// [`unsubscribe`](Self::unsubscribe) to detach it.
#[derive(Debug)]
pub struct Subscription {
    target: Weak<RefCell<Inner>>,
    id: u64,
}

impl Subscription {
    /// Detach the listener. Returns `false` if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.target.upgrade() else {
            return false;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != self.id);
        inner.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter(controller: &ValueController) -> (Rc<Cell<usize>>, Subscription) {
        let count = Rc::new(Cell::new(0));
        let sink = count.clone();
        let sub = controller.subscribe(move |_| sink.set(sink.get() + 1));
        (count, sub)
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let err = ValueController::new(0.5, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            ControllerError::InvalidBounds {
                lower: 1.0,
                upper: 0.0
            }
        );
        assert!(ValueController::new(0.5, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_new_clamps_initial_value() {
        let c = ValueController::new(3.0, 0.0, 1.0).unwrap();
        assert_eq!(c.value(), 1.0);
        let c = ValueController::new(f32::NAN, 0.25, 1.0).unwrap();
        assert_eq!(c.value(), 0.25);
    }

    #[test]
    fn test_set_clamps_and_notifies() {
        let c = ValueController::new(0.5, 0.0, 1.0).unwrap();
        let seen = Rc::new(Cell::new(-1.0));
        let sink = seen.clone();
        let _sub = c.subscribe(move |v| sink.set(v));

        assert!(c.set(2.0));
        assert_eq!(c.value(), 1.0);
        assert_eq!(seen.get(), 1.0);
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn test_noop_set_does_not_notify() {
        let c = ValueController::new(0.5, 0.0, 1.0).unwrap();
        let (count, _sub) = counter(&c);

        assert!(!c.set(0.5));
        assert!(c.set(1.5));
        // Clamped to the stored upper bound, so nothing changes
        assert!(!c.set(7.0));
        assert_eq!(count.get(), 1);
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn test_nan_set_is_ignored() {
        let c = ValueController::new(0.5, 0.0, 1.0).unwrap();
        let (count, _sub) = counter(&c);
        assert!(!c.set(f32::NAN));
        assert_eq!(c.value(), 0.5);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_unsubscribe_detaches_listener() {
        let c = ValueController::new(0.0, 0.0, 1.0).unwrap();
        let (count, sub) = counter(&c);
        c.set(0.1);
        assert!(sub.unsubscribe());
        c.set(0.2);
        assert_eq!(count.get(), 1);
        assert_eq!(c.listener_count(), 0);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let c = ValueController::new(0.0, 0.0, 1.0).unwrap();
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = order.clone();
        let b = order.clone();
        let _s1 = c.subscribe(move |_| a.borrow_mut().push("first"));
        let _s2 = c.subscribe(move |_| b.borrow_mut().push("second"));
        c.set(1.0);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_listener_can_set_another_controller() {
        let source = ValueController::new(0.0, 0.0, 1.0).unwrap();
        let target = ValueController::new(0.0, 0.0, 100.0).unwrap();
        let sink = target.clone();
        let _sub = source.subscribe(move |v| {
            sink.set(v * 100.0);
        });
        source.set(0.5);
        assert_eq!(target.value(), 50.0);
    }

    #[test]
    fn test_listener_can_reenter_same_controller() {
        let c = ValueController::new(0.0, 0.0, 1.0).unwrap();
        let handle = c.clone();
        let _sub = c.subscribe(move |v| {
            if v > 0.5 {
                handle.set(0.5);
            }
        });
        c.set(0.9);
        assert_eq!(c.value(), 0.5);
    }

    #[test]
    fn test_dispose_detaches_everything() {
        let c = ValueController::new(0.0, 0.0, 1.0).unwrap();
        let (count, _sub) = counter(&c);
        c.dispose();
        assert!(c.is_disposed());
        assert!(c.set(1.0));
        assert_eq!(count.get(), 0);

        let (late, late_sub) = counter(&c);
        c.set(0.0);
        assert_eq!(late.get(), 0);
        assert!(!late_sub.unsubscribe());
    }

    #[test]
    fn test_reader_observes_changes() {
        let c = ValueController::new(0.0, 0.0, 360.0).unwrap();
        let reader = c.reader();
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        let _sub = reader.subscribe(move |v| sink.set(v));

        c.set(120.0);
        assert_eq!(reader.value(), 120.0);
        assert_eq!(reader.revision(), 1);
        assert_eq!(seen.get(), 120.0);
    }
}
