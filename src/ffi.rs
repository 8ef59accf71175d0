//! C ABI over `DynamicArray<i64>`.
//!
//! Handles are opaque heap pointers created by [`dynarray_i64_new`] or
//! [`dynarray_i64_clone`] and released by [`dynarray_i64_drop`]. Status-
//! returning calls yield `0` on success and `-1` on failure (allocation
//! failure or an index out of range); the array is unchanged on failure.

use std::ptr;

use crate::DynamicArray;

pub type Handle = *mut DynamicArray<i64>;

const OK: i64 = 0;
const FAILED: i64 = -1;

fn status<T, E>(res: Result<T, E>) -> i64 {
    match res {
        Ok(_) => OK,
        Err(_) => FAILED,
    }
}

/// Create a new, empty array.
#[unsafe(no_mangle)]
pub extern "C" fn dynarray_i64_new() -> Handle {
    Box::into_raw(Box::new(DynamicArray::<i64>::new()))
}

/// Deep-copy an array into a new handle. Null on allocation failure.
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_clone(arr: *const DynamicArray<i64>) -> Handle {
    let arr = unsafe { &*arr };
    match arr.try_clone() {
        Ok(copy) => Box::into_raw(Box::new(copy)),
        Err(_) => ptr::null_mut(),
    }
}

/// Append an element.
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_push(arr: Handle, elem: i64) -> i64 {
    let arr = unsafe { &mut *arr };
    status(arr.try_push_back(elem))
}

/// Remove and return the last element, or 0 when empty.
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_pop(arr: Handle) -> i64 {
    let arr = unsafe { &mut *arr };
    arr.pop_back().unwrap_or(0)
}

/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_len(arr: *const DynamicArray<i64>) -> usize {
    unsafe { &*arr }.len()
}

/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_cap(arr: *const DynamicArray<i64>) -> usize {
    unsafe { &*arr }.capacity()
}

/// Pointer to the element at `index`, or null if out of range.
///
/// The pointer is invalidated by any call that may reallocate.
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_get_ptr(arr: Handle, index: usize) -> *mut i64 {
    let arr = unsafe { &mut *arr };
    match arr.get_mut(index) {
        Some(slot) => slot as *mut i64,
        None => ptr::null_mut(),
    }
}

/// Overwrite the element at `index`.
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_set(arr: Handle, index: usize, value: i64) -> i64 {
    let arr = unsafe { &mut *arr };
    match arr.get_mut(index) {
        Some(slot) => {
            *slot = value;
            OK
        }
        None => FAILED,
    }
}

/// Insert `value` before `index` (`index == len` appends).
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_insert(arr: Handle, index: usize, value: i64) -> i64 {
    let arr = unsafe { &mut *arr };
    if index > arr.len() {
        return FAILED;
    }
    status(arr.try_insert(index, value))
}

/// Remove `[first, last)`.
///
/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_erase(arr: Handle, first: usize, last: usize) -> i64 {
    let arr = unsafe { &mut *arr };
    if first > last || last > arr.len() {
        return FAILED;
    }
    arr.erase_range(first..last);
    OK
}

/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_reserve(arr: Handle, n: usize) -> i64 {
    let arr = unsafe { &mut *arr };
    status(arr.try_reserve(n))
}

/// # Safety
///
/// `arr` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_shrink_to_fit(arr: Handle) -> i64 {
    let arr = unsafe { &mut *arr };
    status(arr.try_shrink_to_fit())
}

/// Release the array. Null is ignored.
///
/// # Safety
///
/// `arr` must be null or a live handle, which is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dynarray_i64_drop(arr: Handle) {
    if !arr.is_null() {
        drop(unsafe { Box::from_raw(arr) });
    }
}
