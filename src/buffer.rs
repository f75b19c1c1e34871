//! Shared backing storage for strided views.
//!
//! A [`SharedBuffer`] is the one thing every alias of a view has in common:
//! reference-counted, interior-mutable storage. Cloning a buffer clones the
//! handle, not the data, so writes through one handle are visible through all.

use std::cell::RefCell;
use std::rc::Rc;

/// Reference-counted, interior-mutable backing buffer.
///
/// All access is index-based; callers never hold a borrow of the underlying
/// `Vec` across operations, so two aliasing views can freely interleave reads
/// and writes on the same storage.
///
/// Indexing past the end of the buffer panics, like slice indexing. Views
/// validate their window at construction so checked view operations never
/// reach that panic.
pub struct SharedBuffer<T> {
    cells: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedBuffer<T> {
    /// Wrap a vector in fresh shared storage.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(data)),
        }
    }

    /// Number of slots in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }

    /// Whether two handles alias the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}

impl<T: Copy> SharedBuffer<T> {
    /// Read the slot at `index`. Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.cells.borrow()[index]
    }

    /// Write `value` into the slot at `index`. Panics if `index >= len`.
    ///
    /// Visible through every handle aliasing this storage.
    #[inline]
    pub fn set(&self, index: usize, value: T) {
        self.cells.borrow_mut()[index] = value;
    }

    /// Contiguous copy of the entire buffer in slot order.
    pub fn snapshot(&self) -> Vec<T> {
        self.cells.borrow().clone()
    }
}

impl<T> Clone for SharedBuffer<T> {
    /// Clone the handle: the returned buffer aliases the same storage.
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
        }
    }
}

impl<T> From<Vec<T>> for SharedBuffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_aliases() {
        let a = SharedBuffer::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        b.set(1, 42);
        assert_eq!(a.get(1), 42);
    }

    #[test]
    fn test_new_does_not_alias() {
        let a = SharedBuffer::new(vec![1, 2, 3]);
        let b = SharedBuffer::new(vec![1, 2, 3]);
        assert!(!a.ptr_eq(&b));
        b.set(0, 9);
        assert_eq!(a.get(0), 1);
    }

    #[test]
    fn test_snapshot() {
        let a = SharedBuffer::from(vec![5, 6, 7]);
        let snap = a.snapshot();
        assert_eq!(snap, vec![5, 6, 7]);
        a.set(0, 0);
        // Snapshot is a copy, not an alias.
        assert_eq!(snap[0], 5);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let a = SharedBuffer::new(vec![1, 2, 3]);
        a.get(3);
    }
}
