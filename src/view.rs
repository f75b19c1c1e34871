//! The one-dimensional strided view type.
//!
//! A [`StridedView1D`] is three scalars of metadata (offset, length, stride)
//! over a [`SharedBuffer`]. Logical index `i` maps to buffer slot
//! `offset + i * stride`. All window transformations are metadata-only;
//! elements move only in [`to_contiguous`](StridedView1D::to_contiguous) and
//! [`assign`](StridedView1D::assign).

use crate::buffer::SharedBuffer;
use crate::{Result, StridedError};

/// Validate that all `len` logical positions stay within `[0, buf_len)`.
fn validate_bounds(buf_len: usize, len: usize, stride: isize, offset: isize) -> Result<()> {
    // Empty view - no access possible.
    if len == 0 {
        return Ok(());
    }
    let span = stride
        .checked_mul(len as isize - 1)
        .ok_or(StridedError::OffsetOverflow)?;
    let mut min_offset = offset;
    let mut max_offset = offset;
    if span >= 0 {
        max_offset = offset
            .checked_add(span)
            .ok_or(StridedError::OffsetOverflow)?;
    } else {
        min_offset = offset
            .checked_add(span)
            .ok_or(StridedError::OffsetOverflow)?;
    }
    if min_offset < 0 {
        return Err(StridedError::OffsetOverflow);
    }
    if max_offset as usize >= buf_len {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(())
}

/// One-dimensional strided view over a [`SharedBuffer`].
///
/// The view does not own its buffer: any number of views (and external
/// holders) may reference the same storage, and the storage lives as long as
/// the longest-lived handle. Writes through one view are visible through
/// every alias.
///
/// The stride is signed. Stride 1 walks the buffer contiguously, larger
/// strides skip slots, negative strides walk backwards, and stride 0 denotes
/// a constant window in which every logical index reads the same slot.
///
/// Construction validates that every logical position lands inside the
/// buffer, so the checked accessors never touch out-of-window storage.
pub struct StridedView1D<T> {
    buffer: SharedBuffer<T>,
    offset: isize,
    len: usize,
    stride: isize,
}

impl<T> StridedView1D<T> {
    /// Create a view of `len` elements starting at slot 0 of `buffer`.
    pub fn new(buffer: SharedBuffer<T>, len: usize, stride: isize) -> Result<Self> {
        Self::with_offset(buffer, len, stride, 0)
    }

    /// Create a view with an explicit starting offset into `buffer`.
    pub fn with_offset(
        buffer: SharedBuffer<T>,
        len: usize,
        stride: isize,
        offset: isize,
    ) -> Result<Self> {
        validate_bounds(buffer.len(), len, stride, offset)?;
        Ok(Self {
            buffer,
            offset,
            len,
            stride,
        })
    }

    /// Wrap a vector in fresh storage and view all of it contiguously.
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            buffer: SharedBuffer::new(data),
            offset: 0,
            len,
            stride: 1,
        }
    }

    /// Number of logical elements visible through this view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer slots between two logically adjacent elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Buffer slot of logical index 0.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Handle to the backing buffer shared by all aliases of this view.
    #[inline]
    pub fn buffer(&self) -> &SharedBuffer<T> {
        &self.buffer
    }

    /// Create an alias: a second view of the same buffer, window and stride.
    ///
    /// No data is copied; `set` through either view is observed by the other.
    pub fn view(&self) -> Self {
        self.clone()
    }

    /// Narrow from the front: drop the first `count` elements.
    ///
    /// The window start advances by `count` strides and the length shrinks by
    /// `count`. In-place; returns the receiver for chaining.
    pub fn lo(&mut self, count: usize) -> Result<&mut Self> {
        if count > self.len {
            return Err(StridedError::NarrowOutOfRange {
                amount: count,
                len: self.len,
            });
        }
        self.offset += count as isize * self.stride;
        self.len -= count;
        Ok(self)
    }

    /// Narrow from the back: keep only the first `count` elements.
    ///
    /// The window start is unchanged. In-place; returns the receiver.
    /// Growing is not supported: `count` may not exceed the current length.
    pub fn hi(&mut self, count: usize) -> Result<&mut Self> {
        if count > self.len {
            return Err(StridedError::NarrowOutOfRange {
                amount: count,
                len: self.len,
            });
        }
        self.len = count;
        Ok(self)
    }

    /// Non-destructive narrowing: a new view of `len` elements starting at
    /// logical index `start`, leaving the receiver untouched.
    ///
    /// Equivalent to `view().lo(start)?.hi(len)?` on a scratch alias.
    pub fn window(&self, start: usize, len: usize) -> Result<Self> {
        if start > self.len || len > self.len - start {
            return Err(StridedError::NarrowOutOfRange {
                amount: start + len,
                len: self.len,
            });
        }
        Ok(Self {
            buffer: self.buffer.clone(),
            offset: self.offset + start as isize * self.stride,
            len,
            stride: self.stride,
        })
    }

    /// Every `step`-th element of this view, starting at logical index 0.
    pub fn step_by(&self, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(StridedError::InvalidStep(step));
        }
        let stride = self
            .stride
            .checked_mul(step as isize)
            .ok_or(StridedError::OffsetOverflow)?;
        Ok(Self {
            buffer: self.buffer.clone(),
            offset: self.offset,
            len: self.len.div_ceil(step),
            stride,
        })
    }

    /// The same window walked back to front (stride negated, offset moved to
    /// the last element). An empty view reverses to an empty alias.
    pub fn reversed(&self) -> Self {
        if self.len == 0 {
            return self.view();
        }
        Self {
            buffer: self.buffer.clone(),
            offset: self.offset + (self.len as isize - 1) * self.stride,
            len: self.len,
            stride: -self.stride,
        }
    }

    /// Identity: a single axis admits no permutation.
    ///
    /// Kept for interface symmetry with a multi-dimensional sibling.
    pub fn transpose(&mut self) -> &mut Self {
        self
    }

    /// Buffer slot of logical index `index`.
    ///
    /// Non-negative for every `index < len` by construction-time validation.
    #[inline]
    fn element_offset(&self, index: usize) -> usize {
        (self.offset + index as isize * self.stride) as usize
    }
}

impl<T: Copy> StridedView1D<T> {
    /// Read the element at logical index `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(StridedError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.buffer.get(self.element_offset(index)))
    }

    /// Read without the view-level bounds check (`debug_assert!` only).
    ///
    /// With an out-of-range index this addresses buffer slots outside the
    /// view's window: it panics if the computed slot falls outside the buffer
    /// and silently reads a foreign slot otherwise.
    #[inline]
    pub fn get_unchecked(&self, index: usize) -> T {
        debug_assert!(index < self.len, "index {} out of bounds", index);
        self.buffer.get(self.element_offset(index))
    }

    /// Write `value` at logical index `index` and return it.
    ///
    /// The write goes through the shared buffer and is visible through every
    /// alias of this view.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        if index >= self.len {
            return Err(StridedError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.buffer.set(self.element_offset(index), value);
        Ok(value)
    }

    /// Write without the view-level bounds check (`debug_assert!` only).
    ///
    /// Same out-of-range behavior as [`get_unchecked`](Self::get_unchecked).
    #[inline]
    pub fn set_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len, "index {} out of bounds", index);
        self.buffer.set(self.element_offset(index), value);
    }

    /// Materialize this view into a freshly allocated contiguous buffer.
    ///
    /// The result has stride 1, offset 0 and the same logical contents, read
    /// in logical order. It shares no storage with the receiver, so writes to
    /// one never affect the other.
    pub fn to_contiguous(&self) -> Self {
        let data: Vec<T> = self.iter().collect();
        Self {
            buffer: SharedBuffer::new(data),
            offset: 0,
            len: self.len,
            stride: 1,
        }
    }

    /// Copy `other`'s logical elements into this view's logical positions.
    ///
    /// If the lengths differ the call is a silent no-op and the receiver is
    /// returned unchanged; use [`try_assign`](Self::try_assign) to detect the
    /// mismatch instead. Elements are copied one at a time in ascending index
    /// order, respecting both views' strides, so overlapping windows over the
    /// same buffer observe partially updated data.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        if other.len != self.len {
            return self;
        }
        for i in 0..self.len {
            let value = other.get_unchecked(i);
            self.set_unchecked(i, value);
        }
        self
    }

    /// Strict assignment: like [`assign`](Self::assign), but a length
    /// mismatch fails with [`StridedError::ShapeMismatch`] instead of
    /// silently doing nothing.
    pub fn try_assign(&mut self, other: &Self) -> Result<&mut Self> {
        if other.len != self.len {
            return Err(StridedError::ShapeMismatch(self.len, other.len));
        }
        Ok(self.assign(other))
    }

    /// Iterate over the elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| self.get_unchecked(i))
    }

    /// Collect the elements in logical order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Clone for StridedView1D<T> {
    /// Shallow handle copy: the clone aliases the same buffer. Use
    /// [`to_contiguous`](StridedView1D::to_contiguous) for a materialized,
    /// independent copy.
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            offset: self.offset,
            len: self.len,
            stride: self.stride,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StridedView1D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedView1D")
            .field("len", &self.len)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
