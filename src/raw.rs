//! Owned, uninitialized slot storage.
//!
//! `RawBuf` only allocates and frees. It never constructs or drops a `T`;
//! tracking which slots are live is the owner's job.

use std::alloc::{Layout, alloc, dealloc};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::AllocError;

pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf exclusively owns its allocation; moving or sharing it is as
// safe as moving or sharing the `T`s that may live in it.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` elements.
    pub fn try_allocate(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;
        if layout.size() == 0 {
            // Zero-sized T: every slot lives at the dangling address.
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let ptr = unsafe { alloc(layout) };
        let ptr = NonNull::new(ptr.cast::<T>()).ok_or(AllocError::OutOfMemory { layout })?;

        Ok(Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchanges storage with `other` without touching any slot.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn layout(&self) -> Option<Layout> {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        // The same layout was already computed successfully at allocation.
        Layout::array::<T>(self.cap).ok()
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout() {
            // SAFETY: ptr was returned by `alloc` with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}
