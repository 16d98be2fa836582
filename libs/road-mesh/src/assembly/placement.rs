//! # Corner and Side Placement
//!
//! Lookup tables that move canonical corner pieces and footpath strips
//! around the footprint rectangle `[0, width] x [0, length]`.
//!
//! Every canonical frame has +x/+z pointing away from the rectangle. A
//! yaw of -90 degrees maps local +x to world +Z and local +z to world -X.

use super::profile::CornerSize;
use crate::geometry::RigidPlacement;
use glam::DVec3;

// =============================================================================
// CORNERS
// =============================================================================

/// Footprint corners, in config array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CornerId {
    /// (width, length)
    NorthEast,
    /// (0, length)
    NorthWest,
    /// (0, 0)
    SouthWest,
    /// (width, 0)
    SouthEast,
}

impl CornerId {
    /// All corners in config array order.
    pub const ALL: [CornerId; 4] = [
        CornerId::NorthEast,
        CornerId::NorthWest,
        CornerId::SouthWest,
        CornerId::SouthEast,
    ];

    /// Index into [`FootprintConfig::corners`](super::FootprintConfig::corners).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two sides that meet at this corner.
    pub fn sides(self) -> (SideId, SideId) {
        match self {
            CornerId::NorthEast => (SideId::North, SideId::East),
            CornerId::NorthWest => (SideId::North, SideId::West),
            CornerId::SouthWest => (SideId::South, SideId::West),
            CornerId::SouthEast => (SideId::South, SideId::East),
        }
    }

    /// Placement of the canonical corner frame inside the footprint.
    pub fn placement(self, width: f64, length: f64) -> RigidPlacement {
        let (yaw, x, z) = match self {
            CornerId::NorthEast => (0.0, width, length),
            CornerId::NorthWest => (-90.0, 0.0, length),
            CornerId::SouthWest => (-180.0, 0.0, 0.0),
            CornerId::SouthEast => (-270.0, width, 0.0),
        };
        RigidPlacement::new(yaw, DVec3::new(x, 0.0, z))
    }

    /// Pad extents `(a, b)` along the canonical x and z axes.
    ///
    /// Quarter-turned corners swap the world extents.
    pub fn canonical_extents(self, size: CornerSize) -> (f64, f64) {
        match self {
            CornerId::NorthEast | CornerId::SouthWest => (size.x, size.z),
            CornerId::NorthWest | CornerId::SouthEast => (size.z, size.x),
        }
    }
}

/// Shape of a corner piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerKind {
    /// Both adjacent sides connected; the curb wraps around the corner
    InwardFacing,
    /// Neither adjacent side connected
    OutwardFacing,
}

/// Corner piece for a pair of side connectivity flags; `None` when exactly
/// one side is connected.
pub fn corner_kind(first_connected: bool, second_connected: bool) -> Option<CornerKind> {
    match (first_connected, second_connected) {
        (true, true) => Some(CornerKind::InwardFacing),
        (false, false) => Some(CornerKind::OutwardFacing),
        _ => None,
    }
}

// =============================================================================
// SIDES
// =============================================================================

/// Footprint sides, in config array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SideId {
    /// z = length, runs west to east
    North,
    /// x = width, runs north to south
    East,
    /// z = 0, runs east to west
    South,
    /// x = 0, runs south to north
    West,
}

impl SideId {
    /// All sides in config array order.
    pub const ALL: [SideId; 4] = [SideId::North, SideId::East, SideId::South, SideId::West];

    /// Index into [`FootprintConfig::sides`](super::FootprintConfig::sides).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Placement of the canonical strip frame: local +x runs along the side,
    /// local +z points away from the rectangle.
    pub fn placement(self, width: f64, length: f64) -> RigidPlacement {
        let (yaw, x, z) = match self {
            SideId::North => (0.0, 0.0, length),
            SideId::East => (-270.0, width, length),
            SideId::South => (-180.0, width, 0.0),
            SideId::West => (-90.0, 0.0, 0.0),
        };
        RigidPlacement::new(yaw, DVec3::new(x, 0.0, z))
    }

    /// Side length.
    pub fn length(self, width: f64, length: f64) -> f64 {
        match self {
            SideId::North | SideId::South => width,
            SideId::East | SideId::West => length,
        }
    }

    /// Corners at the start (local x = 0) and end of the side.
    pub fn end_corners(self) -> (CornerId, CornerId) {
        match self {
            SideId::North => (CornerId::NorthWest, CornerId::NorthEast),
            SideId::East => (CornerId::NorthEast, CornerId::SouthEast),
            SideId::South => (CornerId::SouthEast, CornerId::SouthWest),
            SideId::West => (CornerId::SouthWest, CornerId::NorthWest),
        }
    }

    /// Sides met at the start and end corners.
    pub fn neighbours(self) -> (SideId, SideId) {
        match self {
            SideId::North => (SideId::West, SideId::East),
            SideId::East => (SideId::North, SideId::South),
            SideId::South => (SideId::East, SideId::West),
            SideId::West => (SideId::South, SideId::North),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_near(a: DVec3, b: DVec3) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_corner_frames_point_away_from_rectangle() {
        let (w, l) = (10.0, 20.0);
        // Canonical (1, 0, 1) lands diagonally outside each corner.
        let expected = [
            DVec3::new(11.0, 0.0, 21.0),
            DVec3::new(-1.0, 0.0, 21.0),
            DVec3::new(-1.0, 0.0, -1.0),
            DVec3::new(11.0, 0.0, -1.0),
        ];
        for (corner, want) in CornerId::ALL.into_iter().zip(expected) {
            assert_near(corner.placement(w, l).apply(DVec3::new(1.0, 0.0, 1.0)), want);
        }
    }

    #[test]
    fn test_canonical_extents_swap_for_quarter_turns() {
        let size = CornerSize::new(2.0, 3.0);
        for corner in CornerId::ALL {
            let (a, b) = corner.canonical_extents(size);
            let placed = corner.placement(0.0, 0.0).apply(DVec3::new(a, 0.0, b));
            assert_relative_eq!(placed.x.abs(), 2.0, epsilon = 1e-9);
            assert_relative_eq!(placed.z.abs(), 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_side_frames_run_between_end_corners() {
        let (w, l) = (10.0, 20.0);
        for side in SideId::ALL {
            let placement = side.placement(w, l);
            let (start, end) = side.end_corners();
            let run = side.length(w, l);
            assert_near(placement.apply(DVec3::ZERO), start.placement(w, l).translation);
            assert_near(placement.apply(DVec3::new(run, 0.0, 0.0)), end.placement(w, l).translation);

            // Local +z leaves the rectangle.
            let out = placement.apply(DVec3::new(run * 0.5, 0.0, 1.0));
            let inside = out.x > 0.0 && out.x < w && out.z > 0.0 && out.z < l;
            assert!(!inside, "{side:?} points inward");
        }
    }

    #[test]
    fn test_neighbours_share_end_corners() {
        for side in SideId::ALL {
            let (start, end) = side.end_corners();
            let (left, right) = side.neighbours();
            assert!(start.sides() == (side, left) || start.sides() == (left, side));
            assert!(end.sides() == (side, right) || end.sides() == (right, side));
        }
    }

    #[test]
    fn test_corner_kind() {
        assert_eq!(corner_kind(true, true), Some(CornerKind::InwardFacing));
        assert_eq!(corner_kind(false, false), Some(CornerKind::OutwardFacing));
        assert_eq!(corner_kind(true, false), None);
        assert_eq!(corner_kind(false, true), None);
    }
}
