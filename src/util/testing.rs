//! Helpers shared by the unit tests of this crate.

use std::cell::Cell;
use std::rc::Rc;

macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "expression failed to panic")
    };
    ($run:expr, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| { $run; })).is_err(),
            $msg
        );
    };
}

pub(crate) use assert_panics;

/// A value that bumps a shared counter when dropped. Clones share the counter, so a collection
/// filled with clones can be checked for releasing every element exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of drops recorded so far, across every clone.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
