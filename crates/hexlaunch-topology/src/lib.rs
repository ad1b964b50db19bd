//! Hexlaunch Grid Topology
//!
//! Slot allocation and geometry for laying out launcher items on an infinite
//! hexagonal grid.
//!
//! # Allocation
//!
//! Items are packed around the origin. Each new item takes the free cell
//! nearest to `(0, 0)`; ties are broken by the fixed clockwise direction
//! order starting east, then breadth-first discovery. Removing an item
//! leaves a hole which the next allocation fills first.
//!
//! # Geometry
//!
//! Cells use axial coordinates `(q, r)` and the cube distance
//! `max(|dx|, |dy|, |dz|)`. Pixel conversion follows the pointy-top layout.
//! The spiral ring of a linear index is available through [`ring_index`].
//!
//! ```
//! use hexlaunch_topology::{Hex, HexSpace};
//!
//! let mut space = HexSpace::new();
//! assert_eq!(space.add("mail").unwrap(), Hex::ORIGIN);
//! assert_eq!(space.add("maps").unwrap(), Hex::new(1, 0));
//! ```

mod error;
mod hex;
mod pixel;
mod ring;
mod space;

pub use error::{Error, Result};
pub use hex::Hex;
pub use pixel::{from_pixel, hex_dimensions, to_pixel, HALF_SQRT3, SQRT3, SQRT3_BY_3};
pub use ring::{ring_index, slots_in_ring, total_slots_through};
pub use space::HexSpace;

/// Neighbours per cell.
pub const NEIGHBORS_PER_HEX: usize = 6;

const _: () = assert!(Hex::DIRECTIONS.len() == NEIGHBORS_PER_HEX);
