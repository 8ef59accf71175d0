//! The growable array.
//!
//! Every operation that can fail (allocation, or a panicking `Clone`) builds
//! a complete replacement first and only then exchanges it with `self`. A
//! failure therefore leaves the array exactly as it was: same length, same
//! capacity, same elements at the same addresses.
//!
//! Reallocation invalidates every reference and raw pointer previously taken
//! into the array. The borrow checker enforces this for references; raw
//! pointers obtained from [`DynamicArray::as_ptr`] are the caller's concern.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Range};
use std::ptr;
use std::slice;

use crate::error::AllocError;
use crate::growth;
use crate::raw::RawBuf;

/// Contiguous, growable, value-semantic array.
///
/// Slots `[0, len)` hold live elements, slots `[len, capacity)` are
/// uninitialized. Two arrays never share storage; `clone` always copies.
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        match RawBuf::try_allocate(capacity) {
            Ok(buf) => Self { buf, len: 0 },
            Err(err) => err.raise(),
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of allocated slots, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base address of the live region.
    ///
    /// Dangling (but non-null and aligned) while nothing is allocated. Valid
    /// only for `[0, len)` and only until the next reallocating call.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live and the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Removes the last element and hands it back, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // Shrink the live region before the slot is read out, so the slot is
        // never counted twice.
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live region.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    /// Removes the element at `index`, shifting the tail down by one.
    ///
    /// Returns the index of the element that now follows the removed one
    /// (equal to `len()` if the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(index < self.len, "Index out of bounds");
        self.erase_range(index..index + 1)
    }

    /// Removes the half-open range `first..last`.
    ///
    /// The removed elements are rotated past the tail by successive swaps and
    /// then popped, so no element is ever duplicated. Returns `first`.
    ///
    /// # Panics
    ///
    /// Panics if `first > last` or `last > len()`.
    pub fn erase_range(&mut self, range: Range<usize>) -> usize {
        let Range { start, end } = range;
        assert!(start <= end && end <= self.len, "Index out of bounds");

        let removed = end - start;
        self.as_mut_slice()[start..].rotate_left(removed);
        for _ in 0..removed {
            self.pop_back();
        }
        start
    }

    /// Exchanges storage, length and capacity with `other` in O(1).
    ///
    /// Elements keep their addresses; only the owning array changes.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        (mem::take(&mut this.buf), this.len)
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copies `src` into a fresh buffer of `capacity` slots.
    ///
    /// If a clone panics, the partially filled copy is dropped on unwind:
    /// its `len` only counts slots that were actually written.
    fn try_copy_with_capacity(src: &[T], capacity: usize) -> Result<Self, AllocError> {
        debug_assert!(capacity >= src.len());
        let mut copy = Self {
            buf: RawBuf::try_allocate(capacity)?,
            len: 0,
        };
        for item in src {
            // SAFETY: copy.len < src.len() <= capacity.
            unsafe { ptr::write(copy.buf.ptr().add(copy.len), item.clone()) };
            copy.len += 1;
        }
        Ok(copy)
    }

    /// Moves to a buffer of exactly `capacity` slots by copy-then-swap.
    fn try_relocate(&mut self, capacity: usize) -> Result<(), AllocError> {
        let mut fresh = Self::try_copy_with_capacity(self.as_slice(), capacity)?;
        self.swap_with(&mut fresh);
        Ok(())
    }

    /// Copies a slice into a new array whose capacity is the smallest power
    /// of two holding it.
    pub fn try_from_slice(src: &[T]) -> Result<Self, AllocError> {
        if src.is_empty() {
            return Ok(Self::new());
        }
        Self::try_copy_with_capacity(src, growth::reserved_capacity(src.len())?)
    }

    /// Deep copy keeping the source's capacity. An empty source yields an
    /// array that has not allocated.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        if self.len == 0 {
            return Ok(Self::new());
        }
        Self::try_copy_with_capacity(self.as_slice(), self.capacity())
    }

    /// Replaces the contents with a copy of `other` (copy, then swap).
    ///
    /// On failure `self` is unchanged.
    pub fn try_assign(&mut self, other: &Self) -> Result<(), AllocError> {
        let mut copy = other.try_clone()?;
        self.swap_with(&mut copy);
        Ok(())
    }

    pub fn assign(&mut self, other: &Self) {
        if let Err(err) = self.try_assign(other) {
            err.raise();
        }
    }

    /// Ensures `capacity() >= n`, rounding the new capacity up to a power of
    /// two. Never shrinks.
    ///
    /// A request already satisfied is left alone, even when the current
    /// capacity is an exact fit that is not a power of two.
    ///
    /// Unlike `Vec::try_reserve`, `n` is a total element count, not an
    /// additional one.
    pub fn try_reserve(&mut self, n: usize) -> Result<(), AllocError> {
        if n <= self.capacity() {
            return Ok(());
        }
        let target = growth::reserved_capacity(n)?;
        self.try_relocate(target)
    }

    pub fn reserve(&mut self, n: usize) {
        if let Err(err) = self.try_reserve(n) {
            err.raise();
        }
    }

    /// Reallocates so that `capacity() == len()`, releasing the buffer
    /// entirely when empty.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), AllocError> {
        if self.len == self.capacity() {
            return Ok(());
        }
        self.try_relocate(self.len)
    }

    pub fn shrink_to_fit(&mut self) {
        if let Err(err) = self.try_shrink_to_fit() {
            err.raise();
        }
    }

    /// Appends `value`, growing the buffer if it is full.
    ///
    /// `value` is already an owned temporary, so growth cannot disturb it.
    /// On failure the array is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.capacity() {
            let new_cap = growth::grown_capacity(self.capacity())?;
            self.try_relocate(new_cap)?;
        }
        // SAFETY: len < capacity after the check above.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            err.raise();
        }
    }

    /// Inserts `value` before `index`, returning `index`.
    ///
    /// The value is appended (the only step that can fail) and then rotated
    /// into place by successive swaps, so at most one growth happens and no
    /// element is copied twice.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, AllocError> {
        assert!(index <= self.len, "Index out of bounds");
        self.try_push_back(value)?;
        self.as_mut_slice()[index..].rotate_right(1);
        Ok(index)
    }

    pub fn insert(&mut self, index: usize, value: T) -> usize {
        match self.try_insert(index, value) {
            Ok(index) => index,
            Err(err) => err.raise(),
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: exactly [0, len) is live. The buffer is freed by RawBuf.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => err.raise(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(src: &[T]) -> Self {
        match Self::try_from_slice(src) {
            Ok(arr) => arr,
            Err(err) => err.raise(),
        }
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(src: [T; N]) -> Self {
        Self::from(&src[..])
    }
}

impl<T: Clone> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T: Clone> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
