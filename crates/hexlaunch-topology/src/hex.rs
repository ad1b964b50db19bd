//! Hexagonal cells in axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees. The cube form adds
//! the redundant third axis `-q - r` so that distance becomes the largest
//! absolute component difference.

use std::ops::{Add, Neg, Sub};

/// A single cell of the infinite hexagonal grid.
///
/// Two values with the same `(q, r)` are the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl Hex {
    /// The origin cell, always the first one allocated.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The six neighbour offsets, clockwise starting east.
    ///
    /// Allocation walks neighbours in exactly this order, so changing it
    /// changes which free cell an item receives.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },  // East
        Self { q: 1, r: -1 }, // Northeast
        Self { q: 0, r: -1 }, // Northwest
        Self { q: -1, r: 0 }, // West
        Self { q: -1, r: 1 }, // Southwest
        Self { q: 0, r: 1 },  // Southeast
    ];

    /// Create a new cell.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Cube coordinates `(x, y, z)` with `x + y + z = 0`.
    ///
    /// Widened to `i128` so that `z = -q - r` exists for every cell.
    pub const fn cube(&self) -> (i128, i128, i128) {
        let q = self.q as i128;
        let r = self.r as i128;
        (q, r, -q - r)
    }

    /// Cube distance: `max(|dx|, |dy|, |dz|)`.
    ///
    /// Saturates at `u64::MAX` for cells on opposite extremes of the `i64`
    /// range, whose `z` difference needs 65 bits.
    pub fn distance(&self, other: &Self) -> u64 {
        let (x1, y1, z1) = self.cube();
        let (x2, y2, z2) = other.cube();
        let dx = (x1 - x2).unsigned_abs();
        let dy = (y1 - y2).unsigned_abs();
        let dz = (z1 - z2).unsigned_abs();
        u64::try_from(dx.max(dy).max(dz)).unwrap_or(u64::MAX)
    }

    /// Ring number around the origin (0 = origin, 1 = first ring, ...).
    pub fn ring(&self) -> u64 {
        self.distance(&Self::ORIGIN)
    }

    /// `self + other`, or `None` if either coordinate overflows.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            q: self.q.checked_add(other.q)?,
            r: self.r.checked_add(other.r)?,
        })
    }

    /// `self - other`, or `None` if either coordinate overflows.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self {
            q: self.q.checked_sub(other.q)?,
            r: self.r.checked_sub(other.r)?,
        })
    }

    /// The neighbours, in [`Hex::DIRECTIONS`] order.
    ///
    /// Yields all six except at the edge of the `i64` range, where
    /// neighbours that do not exist are skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = Self> {
        let hex = *self;
        Self::DIRECTIONS
            .into_iter()
            .filter_map(move |d| hex.checked_add(d))
    }

    /// Whether `other` is one of the six neighbours.
    pub fn is_neighbor(&self, other: &Self) -> bool {
        other
            .checked_sub(*self)
            .is_some_and(|d| Self::DIRECTIONS.contains(&d))
    }
}

impl Add for Hex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for Hex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for Hex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
