//! # Quad
//!
//! Four-point face that can grow new quads off any of its edges. Chained
//! extrusions read naturally: the far edge of every extruded quad is its
//! edge 1.
//!
//! ```text
//!   v3 ---- e2 ---- v2
//!    |              |
//!   e3     front    e1
//!    |              |
//!   v0 ---- e0 ---- v1
//! ```
//!
//! Seen from the front the loop runs clockwise, so the sketch above is
//! viewed from behind.

use crate::error::{MeshError, MeshResult};
use crate::extrude::{DirectionSpace, EdgeFrame, ExtrudeSpec};
use crate::geometry::{front_normal, FacePoints, RigidPlacement, FALLBACK_NORMAL};
use glam::DVec3;

/// A clockwise four-point face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Corner points, clockwise seen from the front
    pub points: [DVec3; 4],
}

impl Quad {
    /// Wraps four points.
    pub fn new(points: [DVec3; 4]) -> Self {
        Self { points }
    }

    /// Front normal, +Y when the quad has no area.
    pub fn normal(&self) -> DVec3 {
        front_normal(&self.points).unwrap_or(FALLBACK_NORMAL)
    }

    /// Edge `i` as `(start, end)`: `v0v1`, `v1v2`, `v2v3`, `v3v0`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EdgeIndexOutOfRange`] for `i > 3`.
    pub fn edge(&self, i: usize) -> MeshResult<(DVec3, DVec3)> {
        if i > 3 {
            return Err(MeshError::EdgeIndexOutOfRange { index: i });
        }
        Ok((self.points[i], self.points[(i + 1) % 4]))
    }

    /// Frame of edge `i` using this quad's normal.
    pub fn edge_frame(&self, i: usize) -> MeshResult<EdgeFrame> {
        let (a, b) = self.edge(i)?;
        EdgeFrame::new(self.normal(), a, b)
    }

    /// Extrudes edge `i` along a world direction.
    pub fn extrude_edge(&self, i: usize, direction: DVec3, amount: f64) -> MeshResult<[DVec3; 4]> {
        self.extrude(
            i,
            &ExtrudeSpec::DirectionAndDistance {
                direction,
                space: DirectionSpace::World,
                distance: amount,
                clamp_to_edge_plane: false,
            },
        )
    }

    /// Extrudes edge `i` with any parameterization.
    pub fn extrude(&self, i: usize, spec: &ExtrudeSpec) -> MeshResult<[DVec3; 4]> {
        spec.apply(&self.edge_frame(i)?)
    }

    /// Extrudes edge `i` and wraps the result; its edge 1 is the far edge.
    pub fn create_quad_from_extrusion(&self, i: usize, spec: &ExtrudeSpec) -> MeshResult<Quad> {
        self.extrude(i, spec).map(Quad::new)
    }

    /// Returns a copy moved by `placement`.
    pub fn transformed(&self, placement: &RigidPlacement) -> Quad {
        let mut points = self.points;
        placement.apply_all(&mut points);
        Quad { points }
    }
}

impl From<[DVec3; 4]> for Quad {
    fn from(points: [DVec3; 4]) -> Self {
        Quad::new(points)
    }
}

impl From<Quad> for FacePoints {
    fn from(quad: Quad) -> Self {
        FacePoints::Quad(quad.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pad() -> Quad {
        Quad::new([
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn test_normal_faces_up() {
        assert_relative_eq!(pad().normal().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_quad_normal_falls_back() {
        let flat = Quad::new([DVec3::ZERO; 4]);
        assert_eq!(flat.normal(), DVec3::Y);
    }

    #[test]
    fn test_edges_wrap_around() {
        let quad = pad();
        assert_eq!(quad.edge(0).unwrap(), (quad.points[0], quad.points[1]));
        assert_eq!(quad.edge(3).unwrap(), (quad.points[3], quad.points[0]));
        assert_eq!(quad.edge(4).unwrap_err(), MeshError::EdgeIndexOutOfRange { index: 4 });
    }

    #[test]
    fn test_edge_outward_points_away_from_interior() {
        let quad = pad();
        // Edge 1 runs along +Z at x = 2, so outward is +X.
        let frame = quad.edge_frame(1).unwrap();
        assert_relative_eq!(frame.outward.x, 1.0, epsilon = 1e-12);
        // Edge 2 runs along -X at z = 1, so outward is +Z.
        let frame = quad.edge_frame(2).unwrap();
        assert_relative_eq!(frame.outward.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrude_edge_moves_far_edge() {
        let far = pad().extrude_edge(1, DVec3::NEG_Y, 0.5).unwrap();
        assert_eq!(far[0], DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(far[1], DVec3::new(2.0, -0.5, 0.0));
        assert_eq!(far[3], DVec3::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_chained_extrusions_keep_front_side_out() {
        let skirt = pad()
            .create_quad_from_extrusion(
                1,
                &ExtrudeSpec::AxisOffsets {
                    offset: DVec3::new(0.35, -0.05, 0.0),
                    project_to_edge_plane: true,
                },
            )
            .unwrap();
        // Sloped skirt faces up and out.
        let n = skirt.normal();
        assert!(n.x > 0.0 && n.y > 0.0);

        let apron = skirt.create_quad_from_extrusion(
            1,
            &ExtrudeSpec::DirectionAndDistance {
                direction: DVec3::NEG_Y,
                space: DirectionSpace::World,
                distance: 0.5,
                clamp_to_edge_plane: true,
            },
        )
        .unwrap();
        // Vertical drop faces straight out.
        assert_relative_eq!(apron.normal().x, 1.0, epsilon = 1e-9);
        assert_eq!(apron.points[0], skirt.points[1]);
        assert_eq!(apron.points[3], skirt.points[2]);
    }

    #[test]
    fn test_transformed_rotates_points() {
        let moved = pad().transformed(&RigidPlacement::new(-180.0, DVec3::ZERO));
        assert_relative_eq!(moved.points[1].x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(moved.normal().y, 1.0, epsilon = 1e-12);
    }
}
