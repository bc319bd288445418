// listless-core - Memoising deferred computation cells
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Delay cells: deferred computations that run at most once.
//!
//! A `Delay` starts out pending, holding the thunk that will produce
//! its value. The first `force` runs the thunk, replaces it with the
//! result, and every later `force` hands back the cached value. The
//! pending thunk is dropped on realisation. Clones share the cell, so
//! forcing any clone realises them all. Sequence combinators lean on
//! this to alias one cell between several views without re-running the
//! computation.
//!
//! Not thread-safe: the state lives in an `Rc<RefCell<_>>`, which makes
//! a `Delay` `!Send` and `!Sync` by construction.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

/// A memoising cell around a deferred computation.
pub struct Delay<T> {
    state: Rc<RefCell<DelayState<T>>>,
}

/// Internal state of a delay.
enum DelayState<T> {
    /// Not yet evaluated - holds the thunk to call
    Pending(Rc<dyn Fn() -> T>),
    /// Already evaluated - holds the cached result
    Realized(T),
}

impl<T: Clone + 'static> Delay<T> {
    /// Create a pending delay from a thunk.
    pub fn new(thunk: impl Fn() -> T + 'static) -> Self {
        Delay {
            state: Rc::new(RefCell::new(DelayState::Pending(Rc::new(thunk)))),
        }
    }

    /// Create an already-realised delay.
    pub fn from_value(value: T) -> Self {
        Delay {
            state: Rc::new(RefCell::new(DelayState::Realized(value))),
        }
    }

    /// Evaluate the cell if not yet done so, then return its value.
    ///
    /// The thunk runs at most once per cell. The borrow on the state is
    /// released before the thunk runs, since thunks routinely force
    /// other delays. A panicking thunk propagates to the caller and
    /// leaves the cell pending.
    pub fn force(&self) -> T {
        let thunk = match &*self.state.borrow() {
            DelayState::Realized(value) => return value.clone(),
            DelayState::Pending(thunk) => Rc::clone(thunk),
        };
        let value = thunk();
        let prev = mem::replace(
            &mut *self.state.borrow_mut(),
            DelayState::Realized(value.clone()),
        );
        // The spent thunk may own other cells; drop it with no borrow held.
        drop(prev);
        value
    }

    /// Check whether the cell has been realised.
    pub fn is_realized(&self) -> bool {
        matches!(*self.state.borrow(), DelayState::Realized(_))
    }

    /// A delay that applies `f` to this cell's value when forced.
    ///
    /// Neither this cell nor `f` runs until the new delay is forced.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> Delay<U> {
        let cell = self.clone();
        Delay::new(move || f(cell.force()))
    }

    /// A delay that applies `f`, which itself returns a delay, and
    /// forces the result: the double deferral collapses to a single
    /// forcing from the caller's side.
    pub fn and_then<U: Clone + 'static>(&self, f: impl Fn(T) -> Delay<U> + 'static) -> Delay<U> {
        let cell = self.clone();
        Delay::new(move || f(cell.force()).force())
    }

    /// A delay evaluating the predicate against this cell's value.
    pub fn filter(&self, pred: impl Fn(&T) -> bool + 'static) -> Delay<bool> {
        let cell = self.clone();
        Delay::new(move || pred(&cell.force()))
    }

    /// A delay combining this cell's value with another's.
    ///
    /// Both operands are forced when the new delay is; no evaluation
    /// order between them is part of the contract.
    pub fn combine<U, V>(
        &self,
        other: &Delay<U>,
        combiner: impl Fn(T, U) -> V + 'static,
    ) -> Delay<V>
    where
        U: Clone + 'static,
        V: Clone + 'static,
    {
        let a = self.clone();
        let b = other.clone();
        Delay::new(move || combiner(a.force(), b.force()))
    }
}

impl<T> Delay<T> {
    /// Steal the realised value if this handle is the cell's sole
    /// owner, leaving `replacement` behind.
    ///
    /// Used by sequence teardown to unlink realised chains iteratively;
    /// a shared or still-pending (or mid-force) cell is left alone.
    pub(crate) fn take_if_unique(&self, replacement: T) -> Option<T> {
        if Rc::strong_count(&self.state) != 1 {
            return None;
        }
        let mut state = self.state.try_borrow_mut().ok()?;
        if matches!(&*state, DelayState::Pending(_)) {
            return None;
        }
        match mem::replace(&mut *state, DelayState::Realized(replacement)) {
            DelayState::Realized(value) => Some(value),
            DelayState::Pending(_) => unreachable!(),
        }
    }
}

impl<T> Clone for Delay<T> {
    /// Clones share the underlying cell: forcing one realises all.
    fn clone(&self) -> Self {
        Delay {
            state: Rc::clone(&self.state),
        }
    }
}

/// Equality forces both cells and compares the values.
impl<T: Clone + PartialEq + 'static> PartialEq for Delay<T> {
    fn eq(&self, other: &Self) -> bool {
        self.force() == other.force()
    }
}

impl<T: fmt::Debug> fmt::Debug for Delay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            DelayState::Pending(_) => write!(f, "#<Delay: pending>"),
            DelayState::Realized(value) => write!(f, "#<Delay: {:?}>", value),
        }
    }
}
