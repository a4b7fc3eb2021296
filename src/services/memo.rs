use std::cell::Cell;

use once_cell::unsync::OnceCell;

/// A value computed on first access and cached afterwards.
///
/// Owned by a single build; a new `Memo` starts uncomputed, so nothing is
/// shared between builds.
pub struct Memo<T, F = Box<dyn FnOnce() -> T>>
where
    F: FnOnce() -> T,
{
    cell: OnceCell<T>,
    init: Cell<Option<F>>,
}

impl<T, F> Memo<T, F>
where
    F: FnOnce() -> T,
{
    pub fn new(init: F) -> Self {
        Self {
            cell: OnceCell::new(),
            init: Cell::new(Some(init)),
        }
    }

    /// # Panics
    ///
    /// If a previous call's initializer panicked.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| match self.init.take() {
            Some(init) => init(),
            None => panic!("Memo initializer panicked on a previous call"),
        })
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn into_inner(self) -> T {
        let Self { cell, init } = self;
        match cell.into_inner() {
            Some(value) => value,
            None => match init.into_inner() {
                Some(init) => init(),
                None => panic!("Memo initializer panicked on a previous call"),
            },
        }
    }
}
