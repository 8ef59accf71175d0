//! Capacity growth policy.
//!
//! Implicit growth starts at one slot and then moves to the smallest power of
//! two strictly greater than the current capacity. For a power-of-two
//! capacity that is plain doubling; an exact fit left behind by
//! `shrink_to_fit` (say 3) rejoins the power-of-two ladder at the next step
//! (4). Explicit reservation rounds the request up to a power of two.

use crate::error::AllocError;

/// Capacity to grow to when a full buffer must take one more element.
pub fn grown_capacity(capacity: usize) -> Result<usize, AllocError> {
    if capacity == 0 {
        return Ok(1);
    }
    capacity
        .checked_add(1)
        .and_then(usize::checked_next_power_of_two)
        .ok_or(AllocError::CapacityOverflow)
}

/// Smallest power of two not less than `n`.
pub fn reserved_capacity(n: usize) -> Result<usize, AllocError> {
    n.checked_next_power_of_two()
        .ok_or(AllocError::CapacityOverflow)
}
