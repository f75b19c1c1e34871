//! One-dimensional strided views over a shared backing buffer.
//!
//! This crate provides a single view type, [`StridedView1D`], that interprets
//! a region of a shared buffer as a logical sequence of elements described by
//! a length and a stride. Views are cheap handles: narrowing, stepping and
//! reversing touch only metadata, never the data itself.
//!
//! # Core Types
//!
//! - [`StridedView1D`]: the view — length, stride and offset over a shared buffer
//! - [`SharedBuffer`]: reference-counted, interior-mutable backing storage
//!
//! # Aliasing
//!
//! [`StridedView1D::view`] (and `Clone`) produce aliases: further views onto
//! the same buffer. A [`set`](StridedView1D::set) through any alias is visible
//! through every other alias. [`to_contiguous`](StridedView1D::to_contiguous)
//! is the operation that breaks this sharing by materializing into fresh,
//! contiguous storage.
//!
//! The types are built on `Rc`/`RefCell` and are therefore `!Send`: a buffer
//! is mutated from one logical thread of control.
//!
//! # Example
//!
//! ```rust
//! use strided1d::StridedView1D;
//!
//! let mut v = StridedView1D::from_vec(vec![10, 20, 30, 40, 50]);
//! let alias = v.view();
//!
//! v.set(0, 99)?;
//! assert_eq!(alias.get(0)?, 99);
//!
//! // Narrow to [20, 30] and materialize it contiguously.
//! v.lo(1)?.hi(2)?;
//! let compact = v.to_contiguous();
//! assert_eq!(compact.stride(), 1);
//! assert_eq!(compact.to_vec(), vec![20, 30]);
//! # Ok::<(), strided1d::StridedError>(())
//! ```
//!
//! # Non-unit strides
//!
//! ```rust
//! use strided1d::{SharedBuffer, StridedView1D};
//!
//! // Every second slot of a six-element buffer: logical [1, 3, 5].
//! let buffer = SharedBuffer::from(vec![1, 2, 3, 4, 5, 6]);
//! let mut v = StridedView1D::new(buffer.clone(), 3, 2)?;
//! assert_eq!(v.to_vec(), vec![1, 3, 5]);
//!
//! v.set(1, 99)?;
//! assert_eq!(buffer.snapshot(), vec![1, 2, 99, 4, 5, 6]);
//! # Ok::<(), strided1d::StridedError>(())
//! ```

pub mod buffer;
pub mod view;

pub use buffer::SharedBuffer;
pub use view::StridedView1D;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during strided view operations.
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// Index passed to `get`/`set` outside the view's logical range.
    #[error("index {index} out of bounds for view of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// View lengths are incompatible for a strict assignment.
    #[error("shape mismatch: {0} vs {1}")]
    ShapeMismatch(usize, usize),

    /// Narrowing past the current window.
    #[error("cannot narrow by {amount} on a view of length {len}")]
    NarrowOutOfRange { amount: usize, len: usize },

    /// A shape/stride/offset combination addresses outside the buffer,
    /// or the offset arithmetic overflows.
    #[error("offset overflow while computing element position")]
    OffsetOverflow,

    /// Zero step passed to `step_by`.
    #[error("invalid step {0}: step must be at least 1")]
    InvalidStep(usize),
}

/// Result type for strided view operations.
pub type Result<T> = std::result::Result<T, StridedError>;
