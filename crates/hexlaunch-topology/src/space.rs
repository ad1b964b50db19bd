//! Occupancy map from hex cells to payloads.
//!
//! Items are packed around the origin: each new payload receives the free
//! cell nearest to `(0, 0)`, found by a breadth-first walk over
//! [`Hex::DIRECTIONS`]. Removal leaves a hole that the next `add` fills
//! first if it is the nearest free cell.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{error, trace};

use crate::error::{Error, Result};
use crate::Hex;

/// A hexagonal grid where each occupied cell holds one payload.
///
/// The space owns its map exclusively. Payloads are stored as given; callers
/// that need shared payloads store `Rc`/`Arc` handles or ids.
#[derive(Debug, Clone)]
pub struct HexSpace<T> {
    cells: HashMap<Hex, T>,
}

impl<T> Default for HexSpace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HexSpace<T> {
    /// Create an empty space.
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Create a space populated from `payloads`, allocated in order.
    pub fn with_payloads<I>(payloads: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut space = Self::new();
        for payload in payloads {
            space.add(payload)?;
        }
        Ok(space)
    }

    /// Place `payload` on the free cell nearest to the origin.
    ///
    /// Ties are broken by [`Hex::DIRECTIONS`] order and breadth-first
    /// discovery, so the same occupancy always yields the same cell.
    ///
    /// Every call walks outward from the origin again instead of resuming a
    /// cached frontier, which makes insertion proportional to the occupied
    /// area. Holes left by [`HexSpace::remove`] are found without extra
    /// bookkeeping this way.
    pub fn add(&mut self, payload: T) -> Result<Hex> {
        let hex = self.find_free_slot(&Hex::DIRECTIONS)?;
        trace!(%hex, count = self.cells.len() + 1, "allocated hex");
        self.cells.insert(hex, payload);
        Ok(hex)
    }

    fn find_free_slot(&self, directions: &[Hex]) -> Result<Hex> {
        if !self.cells.contains_key(&Hex::ORIGIN) {
            return Ok(Hex::ORIGIN);
        }

        let mut seen: HashSet<Hex> = HashSet::with_capacity(self.cells.len() * 2 + 7);
        let mut frontier: VecDeque<Hex> = VecDeque::new();
        seen.insert(Hex::ORIGIN);
        for dir in directions {
            if seen.insert(*dir) {
                frontier.push_back(*dir);
            }
        }

        while let Some(current) = frontier.pop_front() {
            if !self.cells.contains_key(&current) {
                return Ok(current);
            }
            for next in directions.iter().filter_map(|dir| current.checked_add(*dir)) {
                if seen.insert(next) {
                    frontier.push_back(next);
                }
            }
        }

        error!(
            occupied = self.cells.len(),
            visited = seen.len(),
            "slot search exhausted its frontier"
        );
        Err(Error::InvariantViolation(format!(
            "no free hex found after visiting {} cells with {} occupied",
            seen.len(),
            self.cells.len()
        )))
    }

    /// Remove the payload at `hex`, if any. Other payloads keep their cells.
    pub fn remove(&mut self, hex: Hex) -> Option<T> {
        let removed = self.cells.remove(&hex);
        if removed.is_some() {
            trace!(%hex, count = self.cells.len(), "released hex");
        }
        removed
    }

    /// Whether `hex` holds a payload.
    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// The payload at `hex`, if any.
    pub fn get(&self, hex: Hex) -> Option<&T> {
        self.cells.get(&hex)
    }

    /// The payload at `hex`, or [`Error::NotFound`].
    pub fn payload(&self, hex: Hex) -> Result<&T> {
        self.cells.get(&hex).ok_or(Error::NotFound(hex))
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove every payload.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// All `(hex, payload)` pairs, in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = (Hex, &T)> + '_ {
        self.cells.iter().map(|(hex, payload)| (*hex, payload))
    }

    /// Occupied cells among the six neighbours of `hex`.
    pub fn neighbor_hexes(&self, hex: Hex) -> HashSet<Hex> {
        hex.neighbors()
            .filter(|n| self.cells.contains_key(n))
            .collect()
    }

    /// Every occupied cell at the smallest distance from `hex`.
    ///
    /// `hex` itself is excluded. Empty when nothing else is occupied.
    pub fn nearest_hexes(&self, hex: Hex) -> HashSet<Hex> {
        self.extreme_hexes(hex, |candidate, best| candidate < best)
    }

    /// Every occupied cell at the largest distance from `hex`.
    ///
    /// `hex` itself is excluded. Empty when nothing else is occupied.
    pub fn farthest_hexes(&self, hex: Hex) -> HashSet<Hex> {
        self.extreme_hexes(hex, |candidate, best| candidate > best)
    }

    fn extreme_hexes<F>(&self, hex: Hex, better: F) -> HashSet<Hex>
    where
        F: Fn(u64, u64) -> bool,
    {
        let mut best: Option<u64> = None;
        let mut group = HashSet::new();

        for other in self.cells.keys().filter(|other| **other != hex) {
            let distance = other.distance(&hex);
            match best {
                Some(d) if d == distance => {
                    group.insert(*other);
                }
                Some(d) if !better(distance, d) => {}
                _ => {
                    best = Some(distance);
                    group.clear();
                    group.insert(*other);
                }
            }
        }
        group
    }
}

impl<T: PartialEq> HexSpace<T> {
    /// The cell holding a payload equal to `payload`.
    ///
    /// If several cells hold equal payloads, which one is returned is
    /// unspecified.
    pub fn find(&self, payload: &T) -> Option<Hex> {
        self.elements()
            .find(|(_, candidate)| *candidate == payload)
            .map(|(hex, _)| hex)
    }

    /// Locate `payload` by equality and remove it, returning its old cell.
    pub fn remove_payload(&mut self, payload: &T) -> Option<Hex> {
        let hex = self.find(payload)?;
        self.remove(hex);
        Some(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring_one() -> Vec<Hex> {
        Hex::ORIGIN.neighbors().collect()
    }

    fn filled(count: usize) -> HexSpace<usize> {
        HexSpace::with_payloads(0..count).unwrap()
    }

    #[test]
    fn starts_empty() {
        let space: HexSpace<u32> = HexSpace::new();
        assert_eq!(space.len(), 0);
        assert!(space.is_empty());
        assert_eq!(space.elements().count(), 0);
    }

    #[test]
    fn first_payload_takes_origin() {
        let mut space = HexSpace::new();
        let hex = space.add("a").unwrap();

        assert_eq!(hex, Hex::ORIGIN);
        assert!(space.contains(Hex::ORIGIN));
        assert_eq!(space.payload(hex), Ok(&"a"));
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn seven_payloads_fill_ring_one_in_direction_order() {
        let mut space = HexSpace::new();
        let hexes: Vec<_> = (0..7).map(|i| space.add(i).unwrap()).collect();

        assert_eq!(hexes[0], Hex::ORIGIN);
        assert_eq!(&hexes[1..], ring_one().as_slice());
        assert_eq!(space.len(), 7);
        for (i, hex) in hexes.iter().enumerate() {
            assert_eq!(space.payload(*hex), Ok(&i));
        }
    }

    #[test]
    fn second_ring_starts_east_of_first_ring() {
        let mut space = filled(7);
        // (1, 0) is dequeued first; its first unseen neighbour is (2, 0).
        assert_eq!(space.add(7).unwrap(), Hex::new(2, 0));
        assert_eq!(space.add(8).unwrap(), Hex::new(2, -1));
    }

    #[test]
    fn nineteen_payloads_fill_two_rings() {
        let space = filled(19);
        let max_ring = space.elements().map(|(h, _)| h.ring()).max();
        assert_eq!(max_ring, Some(2));
        assert_eq!(space.elements().filter(|(h, _)| h.ring() == 2).count(), 12);
    }

    #[test]
    fn removed_hex_is_refilled_first() {
        let mut space = filled(10);
        let hole = Hex::new(0, -1);
        assert_eq!(space.remove(hole), Some(3));
        assert_eq!(space.len(), 9);

        assert_eq!(space.add(99).unwrap(), hole);
        assert_eq!(space.payload(hole), Ok(&99));
    }

    #[test]
    fn removing_origin_refills_origin() {
        let mut space = filled(7);
        space.remove(Hex::ORIGIN);
        assert_eq!(space.add(42).unwrap(), Hex::ORIGIN);
    }

    #[test]
    fn remove_absent_hex_is_noop() {
        let mut space = filled(3);
        assert_eq!(space.remove(Hex::new(10, 10)), None);
        assert_eq!(space.len(), 3);
    }

    #[test]
    fn payload_of_empty_hex_is_not_found() {
        let space = filled(1);
        assert_eq!(
            space.payload(Hex::new(1, 0)),
            Err(Error::NotFound(Hex::new(1, 0)))
        );
        assert_eq!(space.get(Hex::new(1, 0)), None);
    }

    #[test]
    fn clear_empties_the_space() {
        let mut space = filled(12);
        space.clear();
        assert!(space.is_empty());
        assert!(!space.contains(Hex::ORIGIN));
    }

    #[test]
    fn find_and_remove_by_payload() {
        let mut space = HexSpace::with_payloads(["mail", "maps", "music"]).unwrap();
        assert_eq!(space.find(&"maps"), Some(Hex::new(1, 0)));
        assert_eq!(space.find(&"clock"), None);

        assert_eq!(space.remove_payload(&"maps"), Some(Hex::new(1, 0)));
        assert_eq!(space.remove_payload(&"maps"), None);
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn neighbor_hexes_are_occupied_subset() {
        let space = filled(3);
        let neighbors = space.neighbor_hexes(Hex::ORIGIN);
        assert_eq!(neighbors, HashSet::from([Hex::new(1, 0), Hex::new(1, -1)]));

        assert!(space.neighbor_hexes(Hex::new(10, 10)).is_empty());
        assert!(HexSpace::<u8>::new().neighbor_hexes(Hex::ORIGIN).is_empty());
    }

    #[test]
    fn nearest_to_origin_is_whole_ring_one() {
        let space = filled(7);
        let nearest = space.nearest_hexes(Hex::ORIGIN);
        assert_eq!(nearest, ring_one().into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn nearest_to_outer_hex_is_single() {
        let space = filled(7);
        let nearest = space.nearest_hexes(Hex::new(2, 0));
        assert_eq!(nearest, HashSet::from([Hex::new(1, 0)]));
    }

    #[test]
    fn farthest_from_origin_is_outer_ring() {
        let space = filled(19);
        let farthest = space.farthest_hexes(Hex::ORIGIN);
        assert_eq!(farthest.len(), 12);
        assert!(farthest.iter().all(|h| h.ring() == 2));
    }

    #[test]
    fn farthest_from_edge_hex() {
        let space = filled(7);
        let farthest = space.farthest_hexes(Hex::new(1, 0));
        assert_eq!(
            farthest,
            HashSet::from([Hex::new(0, -1), Hex::new(-1, 0), Hex::new(-1, 1)])
        );
    }

    #[test]
    fn proximity_queries_exclude_reference_hex() {
        let space = filled(1);
        assert!(space.nearest_hexes(Hex::ORIGIN).is_empty());
        assert!(space.farthest_hexes(Hex::ORIGIN).is_empty());

        assert_eq!(
            space.nearest_hexes(Hex::new(3, 3)),
            HashSet::from([Hex::ORIGIN])
        );

        let empty: HexSpace<u8> = HexSpace::new();
        assert!(empty.nearest_hexes(Hex::ORIGIN).is_empty());
        assert!(empty.farthest_hexes(Hex::ORIGIN).is_empty());
    }

    #[test]
    fn queries_at_extreme_coordinates() {
        let space = filled(7);

        assert!(space.neighbor_hexes(Hex::new(i64::MAX, 0)).is_empty());
        assert!(space.neighbor_hexes(Hex::new(i64::MIN, i64::MIN)).is_empty());

        // A pixel far off the grid saturates to the edge of the i64 range.
        let far = crate::from_pixel(-1e30, 0.0, 25.0);
        assert_eq!(far, Hex::new(i64::MIN, 0));
        assert_eq!(space.nearest_hexes(far), HashSet::from([Hex::new(-1, 0)]));
        assert_eq!(
            space.farthest_hexes(far),
            HashSet::from([Hex::new(1, 0), Hex::new(1, -1), Hex::new(0, 1)])
        );
    }

    #[test]
    fn empty_direction_table_is_invariant_violation() {
        let space = filled(1);
        let err = space.find_free_slot(&[]).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));

        // With the origin free the base case still answers.
        let empty: HexSpace<u8> = HexSpace::new();
        assert_eq!(empty.find_free_slot(&[]), Ok(Hex::ORIGIN));
    }

    #[test]
    fn spaces_do_not_share_cells() {
        let mut a = HexSpace::new();
        let b: HexSpace<u8> = HexSpace::new();
        a.add(1u8).unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    proptest! {
        #[test]
        fn allocations_are_unique_and_compact(count in 1usize..150) {
            let mut space = HexSpace::new();
            let mut seen = HashSet::new();
            for i in 0..count {
                let hex = space.add(i).unwrap();
                prop_assert!(seen.insert(hex), "hex {} assigned twice", hex);
            }
            prop_assert_eq!(space.len(), count);

            // Packing is ring by ring: only the outermost ring can be partial.
            let max_ring = seen.iter().map(|h| h.ring()).max().unwrap();
            for ring in 0..max_ring {
                let in_ring = seen.iter().filter(|h| h.ring() == ring).count() as u64;
                prop_assert_eq!(in_ring, crate::slots_in_ring(ring));
            }
        }

        #[test]
        fn removal_then_add_reuses_hole(count in 2usize..60, pick in 0usize..60) {
            let mut space = HexSpace::with_payloads(0..count).unwrap();
            let hexes: Vec<_> = space.elements().map(|(h, _)| h).collect();
            let hole = hexes[pick % hexes.len()];
            space.remove(hole);
            let refilled = space.add(usize::MAX).unwrap();
            prop_assert!(refilled.ring() <= hole.ring());
            prop_assert_eq!(space.len(), count);
        }
    }
}
