//! Common test helpers for integration tests.
//!
//! Alternative types that record what happens to them, so tests can observe
//! constructions, moves and drops performed by the container.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because Rust compiles each
//! integration test file as a separate crate, and not every file uses every
//! helper.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Shared drop counter.
pub type Counter = Rc<Cell<usize>>;

pub fn counter() -> Counter {
    Rc::new(Cell::new(0))
}

/// Sets a shared flag when dropped while still owning it.
///
/// Not `Clone`. `Default` is the moved-from state: it owns no flag.
#[derive(Debug, Default)]
pub struct Flagged {
    fired: Option<Rc<Cell<bool>>>,
}

impl Flagged {
    pub fn new(fired: &Rc<Cell<bool>>) -> Self {
        Self {
            fired: Some(Rc::clone(fired)),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.fired.is_some()
    }
}

impl Drop for Flagged {
    fn drop(&mut self) {
        if let Some(fired) = &self.fired {
            fired.set(true);
        }
    }
}

/// Increments a shared counter when dropped while still owning it.
///
/// Clones share the counter. `Default` is the moved-from state.
#[derive(Debug, Clone, Default)]
pub struct Counted {
    counter: Option<Counter>,
}

impl Counted {
    pub fn new(counter: &Counter) -> Self {
        Self {
            counter: Some(Rc::clone(counter)),
        }
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.set(counter.get() + 1);
        }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        match (&self.counter, &other.counter) {
            (Some(mine), Some(theirs)) => Rc::ptr_eq(mine, theirs),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Like [`Counted`], but move-only.
#[derive(Debug, Default)]
pub struct MoveOnly {
    counter: Option<Counter>,
}

impl MoveOnly {
    pub fn new(counter: &Counter) -> Self {
        Self {
            counter: Some(Rc::clone(counter)),
        }
    }
}

impl Drop for MoveOnly {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.set(counter.get() + 1);
        }
    }
}

/// Records constructions and drops in one shared ledger, to balance them.
#[derive(Debug)]
pub struct Ledgered<T> {
    pub value: T,
    ledger: Rc<Ledger>,
}

#[derive(Debug, Default)]
pub struct Ledger {
    pub created: Cell<usize>,
    pub dropped: Cell<usize>,
}

impl Ledger {
    pub fn live(&self) -> usize {
        self.created.get() - self.dropped.get()
    }
}

impl<T> Ledgered<T> {
    pub fn new(value: T, ledger: &Rc<Ledger>) -> Self {
        ledger.created.set(ledger.created.get() + 1);
        Self {
            value,
            ledger: Rc::clone(ledger),
        }
    }
}

impl<T: Clone> Clone for Ledgered<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone(), &self.ledger)
    }
}

impl<T: PartialEq> PartialEq for Ledgered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Ledgered<T> {
    fn drop(&mut self) {
        self.ledger.dropped.set(self.ledger.dropped.get() + 1);
    }
}
