//! # Geometry Primitives
//!
//! Plane normals, bounding boxes, rigid placement and the small point-set
//! types that flow from the extrusion engine into the accumulator.
//!
//! ## Conventions
//!
//! - Right-handed coordinates, +Y is up
//! - Generated point loops wind clockwise seen from their front side, so the
//!   front normal of `[p0, p1, p2, ..]` is `unit(cross(p2 - p0, p1 - p0))`

mod placement;


pub use placement::RigidPlacement;

use crate::mesh::SurfaceTag;
use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

/// Normal used whenever a face is too small to define its own plane.
pub const FALLBACK_NORMAL: DVec3 = DVec3::Y;

// =============================================================================
// NORMALS
// =============================================================================

/// Returns `unit(cross(b - a, c - a))`, or `None` for a zero-area triangle.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use road_mesh::geometry::plane_normal;
///
/// let n = plane_normal(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
/// assert_eq!(n, DVec3::Z);
/// assert!(plane_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
/// ```
pub fn plane_normal(a: DVec3, b: DVec3, c: DVec3) -> Option<DVec3> {
    let cross = (b - a).cross(c - a);
    let length = cross.length();
    if length < DEGENERATE_AREA_EPSILON || !length.is_finite() {
        return None;
    }
    Some(cross / length)
}

/// Front normal of a clockwise point loop (3 or 4 points).
///
/// Quads whose first triangle is degenerate fall back to the second one.
pub fn front_normal(points: &[DVec3]) -> Option<DVec3> {
    match points {
        [p0, p1, p2] => plane_normal(*p0, *p2, *p1),
        [p0, p1, p2, p3] => plane_normal(*p0, *p2, *p1).or_else(|| plane_normal(*p0, *p3, *p2)),
        _ => None,
    }
}

/// Axis-aligned bounds of a point set as `(min, max)`.
///
/// An empty set yields `(ZERO, ZERO)`.
pub fn bounding_box<'a>(points: impl IntoIterator<Item = &'a DVec3>) -> (DVec3, DVec3) {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return (DVec3::ZERO, DVec3::ZERO);
    };
    iter.fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
}

// =============================================================================
// POINT SETS
// =============================================================================

/// A triangle or quad point loop in clockwise front order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacePoints {
    /// Three-point loop
    Triangle([DVec3; 3]),
    /// Four-point loop
    Quad([DVec3; 4]),
}

impl FacePoints {
    /// Borrows the points as a slice.
    pub fn as_slice(&self) -> &[DVec3] {
        match self {
            FacePoints::Triangle(points) => points,
            FacePoints::Quad(points) => points,
        }
    }

    /// Front normal of the loop, if it has area.
    pub fn front_normal(&self) -> Option<DVec3> {
        front_normal(self.as_slice())
    }

    /// Returns a copy moved by `placement`.
    pub fn transformed(&self, placement: &RigidPlacement) -> Self {
        let mut moved = *self;
        match &mut moved {
            FacePoints::Triangle(points) => placement.apply_all(points),
            FacePoints::Quad(points) => placement.apply_all(points),
        }
        moved
    }
}

impl From<[DVec3; 3]> for FacePoints {
    fn from(points: [DVec3; 3]) -> Self {
        FacePoints::Triangle(points)
    }
}

impl From<[DVec3; 4]> for FacePoints {
    fn from(points: [DVec3; 4]) -> Self {
        FacePoints::Quad(points)
    }
}

/// A point set plus the surface category it will be submitted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedFace {
    /// The face loop
    pub points: FacePoints,
    /// Classification for the rendering layer
    pub tag: SurfaceTag,
}

impl TaggedFace {
    /// Pairs a point set with its tag.
    pub fn new(points: impl Into<FacePoints>, tag: SurfaceTag) -> Self {
        Self {
            points: points.into(),
            tag,
        }
    }

    /// Returns a copy moved by `placement`.
    pub fn transformed(&self, placement: &RigidPlacement) -> Self {
        Self {
            points: self.points.transformed(placement),
            tag: self.tag,
        }
    }
}
