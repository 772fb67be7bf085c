//! Value bindings
//!
//! The slider never owns the selected range. It reads and writes it through
//! the [`ValueBinding`] contract, which the host implements over whatever
//! state mechanism it already has.
//!
//! Two ready-made implementations are provided:
//!
//! - [`Binding<T>`]: a shared, versioned cell. Clones observe the same value.
//! - [`ScalarPairBinding`]: adapts a pair of scalar bindings (lower, upper)
//!   into a single range binding.
//!
//! ```rust
//! use twinrange_core::binding::{Binding, ScalarPairBinding, ValueBinding};
//! use twinrange_core::SelectionRange;
//!
//! let lower = Binding::new(10.0);
//! let upper = Binding::new(90.0);
//! let range = ScalarPairBinding::new(lower.clone(), upper.clone());
//!
//! assert_eq!(range.get(), SelectionRange::new(10.0, 90.0));
//!
//! range.set(SelectionRange::new(20.0, 80.0));
//! assert_eq!(lower.get(), 20.0);
//! assert_eq!(upper.get(), 80.0);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::range::SelectionRange;

/// Get/set contract for a host-owned value
pub trait ValueBinding<T>: Send + Sync {
    /// Current value
    fn get(&self) -> T;

    /// Replace the value, notifying the host's observers
    fn set(&self, value: T);
}

/// Shared range binding as handed to the slider
pub type SelectionBinding = Arc<dyn ValueBinding<SelectionRange>>;

/// A shared value cell with a change counter
///
/// This is the simplest host-side state: clone it, hand one clone to the
/// slider and keep another to observe or drive the value.
#[derive(Debug)]
pub struct Binding<T> {
    value: Arc<Mutex<T>>,
    version: Arc<AtomicU64>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Clone + Send> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the current value
    pub fn get(&self) -> T {
        self.value.lock().clone()
    }

    /// Set a new value and bump the version
    pub fn set(&self, value: T) {
        *self.value.lock() = value;
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let mut guard = self.value.lock();
        *guard = f(guard.clone());
        drop(guard);
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of writes so far
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send + 'static> ValueBinding<T> for Binding<T> {
    fn get(&self) -> T {
        Binding::get(self)
    }

    fn set(&self, value: T) {
        Binding::set(self, value);
    }
}

/// Two scalar bindings exposed as one range binding
///
/// The getter composes `{lower, upper}`; the setter decomposes a range back
/// into the two scalars.
pub struct ScalarPairBinding {
    lower: Arc<dyn ValueBinding<f32>>,
    upper: Arc<dyn ValueBinding<f32>>,
}

impl ScalarPairBinding {
    pub fn new(
        lower: impl ValueBinding<f32> + 'static,
        upper: impl ValueBinding<f32> + 'static,
    ) -> Self {
        Self {
            lower: Arc::new(lower),
            upper: Arc::new(upper),
        }
    }
}

impl ValueBinding<SelectionRange> for ScalarPairBinding {
    fn get(&self) -> SelectionRange {
        SelectionRange::new(self.lower.get(), self.upper.get())
    }

    fn set(&self, value: SelectionRange) {
        self.lower.set(value.lower);
        self.upper.set(value.upper);
    }
}

/// A binding built from host getter/setter closures
pub struct FnBinding<T> {
    getter: Box<dyn Fn() -> T + Send + Sync>,
    setter: Box<dyn Fn(T) + Send + Sync>,
}

impl<T> FnBinding<T> {
    pub fn new<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn() -> T + Send + Sync + 'static,
        S: Fn(T) + Send + Sync + 'static,
    {
        Self {
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }
}

impl<T> ValueBinding<T> for FnBinding<T> {
    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&self, value: T) {
        (self.setter)(value)
    }
}
