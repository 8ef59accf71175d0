//! Owning iteration.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::array::DynamicArray;
use crate::raw::RawBuf;

/// Iterator that moves elements out of a [`DynamicArray`].
///
/// Elements not consumed are dropped with the iterator, which then frees the
/// buffer.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is live.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The array's own Drop must not run: ownership of the live slots
        // passes to the iterator.
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is live and leaves the live range right after.
        let item = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // 1. Drop the elements that were never yielded.
        // SAFETY: [start, end) is live.
        unsafe {
            let remaining = self.buf.ptr().add(self.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(remaining, self.end - self.start));
        }
        // 2. The buffer itself goes with `self.buf`.
    }
}
