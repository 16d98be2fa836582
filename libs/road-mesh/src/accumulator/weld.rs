//! # Weld Index
//!
//! Spatial hash over welded vertex positions. Buckets are one weld distance
//! wide, so any vertex within that distance of a query point sits in one of
//! the 27 cells around it.

use glam::DVec3;
use std::collections::HashMap;

/// 3D cell coordinate for spatial hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CellCoord {
    x: i64,
    y: i64,
    z: i64,
}

impl CellCoord {
    /// Creates a cell coordinate from 3D position.
    fn from_position(pos: DVec3, cell_size: f64) -> Self {
        Self {
            x: (pos.x / cell_size).floor() as i64,
            y: (pos.y / cell_size).floor() as i64,
            z: (pos.z / cell_size).floor() as i64,
        }
    }

    fn offset(self, dx: i64, dy: i64, dz: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }
}

/// Hash grid: cell -> vertex indices, in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct WeldIndex {
    grid: HashMap<CellCoord, Vec<u32>>,
    cell_size: f64,
}

impl WeldIndex {
    /// Creates an empty index whose buckets are `cell_size` wide.
    pub(crate) fn new(cell_size: f64) -> Self {
        Self {
            grid: HashMap::new(),
            cell_size,
        }
    }

    /// Records a vertex at `pos`.
    pub(crate) fn insert(&mut self, index: u32, pos: DVec3) {
        let cell = CellCoord::from_position(pos, self.cell_size);
        self.grid.entry(cell).or_default().push(index);
    }

    /// Vertex indices stored in the 27 cells around `pos`.
    ///
    /// Candidates still need an exact distance check.
    pub(crate) fn candidates(&self, pos: DVec3) -> impl Iterator<Item = u32> + '_ {
        let center = CellCoord::from_position(pos, self.cell_size);
        (-1..=1)
            .flat_map(move |dx| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dz| (dx, dy, dz))))
            .filter_map(move |(dx, dy, dz)| self.grid.get(&center.offset(dx, dy, dz)))
            .flatten()
            .copied()
    }

    pub(crate) fn clear(&mut self) {
        self.grid.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_cross_cell_boundary() {
        let mut index = WeldIndex::new(0.1);
        index.insert(0, DVec3::new(0.0999, 0.0, 0.0));
        let found: Vec<u32> = index.candidates(DVec3::new(0.1001, 0.0, 0.0)).collect();
        assert_eq!(found, vec![0]);
    }

    #[test]
    fn test_far_points_are_not_candidates() {
        let mut index = WeldIndex::new(0.1);
        index.insert(0, DVec3::ZERO);
        assert_eq!(index.candidates(DVec3::new(1.0, 0.0, 0.0)).count(), 0);
    }

    #[test]
    fn test_clear_empties_grid() {
        let mut index = WeldIndex::new(0.1);
        index.insert(3, DVec3::ONE);
        index.clear();
        assert_eq!(index.candidates(DVec3::ONE).count(), 0);
    }
}
