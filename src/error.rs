//! Allocation failure reporting.

use std::alloc::{Layout, handle_alloc_error};
use std::error::Error;
use std::fmt;

/// Failure to obtain raw storage for a buffer.
///
/// Element construction failures are not represented here: a panicking
/// `Clone` unwinds through the container instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested slot count cannot be described by a `Layout`, or the
    /// growth policy ran past `usize::MAX`.
    CapacityOverflow,
    /// The global allocator returned null.
    OutOfMemory {
        /// Layout of the request that failed.
        layout: Layout,
    },
}

impl AllocError {
    /// Escalates the failure for the infallible API surface.
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::OutOfMemory { layout } => handle_alloc_error(layout),
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::OutOfMemory { layout } => {
                write!(
                    f,
                    "allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
        }
    }
}

impl Error for AllocError {}
