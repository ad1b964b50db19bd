//! Ring numbering for the spiral enumeration of the grid.
//!
//! The spiral numbers cells outward ring by ring:
//!
//! - Ring 0: index 0 (the origin)
//! - Ring 1: indices 1-6
//! - Ring 2: indices 7-18
//! - Ring n: indices `1 + 3n(n-1)` through `3n(n+1)`

use crate::error::{Error, Result};

/// Number of cells in ring `ring`.
///
/// - Ring 0: 1 cell (origin)
/// - Ring n > 0: 6n cells
#[inline]
pub const fn slots_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// Total cells through ring `ring` (inclusive): `1 + 3n(n+1)`.
#[inline]
pub const fn total_slots_through(ring: u64) -> u64 {
    1 + 3 * ring * (ring + 1)
}

/// Map a zero-based spiral index to the ring it falls in.
///
/// Returns [`Error::InvalidArgument`] for negative indices.
///
/// # Examples
///
/// ```
/// use hexlaunch_topology::ring_index;
///
/// assert_eq!(ring_index(0).unwrap(), 0);
/// assert_eq!(ring_index(6).unwrap(), 1);
/// assert_eq!(ring_index(7).unwrap(), 2);
/// assert!(ring_index(-1).is_err());
/// ```
pub fn ring_index(element_index: i64) -> Result<u64> {
    if element_index < 0 {
        return Err(Error::InvalidArgument {
            name: "element_index",
            value: element_index,
        });
    }

    let index = element_index as u64;
    if index == 0 {
        return Ok(0);
    }

    // Smallest ring whose cumulative total exceeds the index. `high` is
    // sized from index/3 so total_slots_through never overflows.
    let mut low = 1u64;
    let mut high = (((index / 3) as f64).sqrt() as u64) + 2;

    while low < high {
        let mid = low + (high - low) / 2;
        if total_slots_through(mid) <= index {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Ok(low)
}
