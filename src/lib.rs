//! A contiguous growable array over manually managed storage.
//!
//! [`DynamicArray`] separates allocation ([`raw::RawBuf`]) from element
//! construction and destruction, and gives every mutating operation the
//! strong guarantee: if allocation fails or an element's `Clone` panics, the
//! array is left exactly as it was.

pub mod array;
pub mod cli;
pub mod error;
pub mod ffi;
pub mod growth;
pub mod iter;
pub mod raw;

pub use array::DynamicArray;
pub use error::AllocError;
pub use iter::IntoIter;
