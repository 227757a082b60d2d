//! Drop-tracking element type.
//!
//! Each [`Tracked`] created from a [`LiveCounter`] bumps the counter while it
//! is alive. Default-constructed values are untracked, so slack and released
//! slots (which hold defaults) never count.

use std::cell::Cell;
use std::rc::Rc;

/// Counts live [`Tracked`] values created through it.
#[derive(Clone, Debug, Default)]
pub struct LiveCounter {
    live: Rc<Cell<usize>>,
}

impl LiveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value.
    pub fn make(&self, value: i64) -> Tracked {
        self.live.set(self.live.get() + 1);
        Tracked {
            value,
            counter: Some(Rc::clone(&self.live)),
        }
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

/// An `i64` that reports its lifetime to a [`LiveCounter`].
#[derive(Debug, Default)]
pub struct Tracked {
    value: i64,
    counter: Option<Rc<Cell<usize>>>,
}

impl Tracked {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(counter) = &self.counter {
            counter.set(counter.get() + 1);
        }
        Self {
            value: self.value,
            counter: self.counter.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.set(counter.get() - 1);
        }
    }
}
