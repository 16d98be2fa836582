//! # Edge Frame
//!
//! Orthonormal frame attached to one edge of a face: the face normal, the
//! edge tangent, and the in-plane direction pointing away from the face.

use crate::error::{MeshError, MeshResult};
use crate::geometry::FALLBACK_NORMAL;
use config::constants::{DEGENERATE_AREA_EPSILON, DEGENERATE_EDGE_EPSILON};
use glam::DVec3;

/// Frame of the edge `a -> b` on a face with normal `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFrame {
    /// Unit face normal
    pub normal: DVec3,
    /// Unit direction from `a` to `b`
    pub tangent: DVec3,
    /// Unit `normal x tangent`, away from the face interior
    pub outward: DVec3,
    /// Edge start
    pub a: DVec3,
    /// Edge end
    pub b: DVec3,
}

impl EdgeFrame {
    /// Builds the frame for edge `a -> b`.
    ///
    /// A zero face normal falls back to +Y. When the tangent runs along the
    /// normal, `outward` falls back to an axis perpendicular to the normal.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateEdge`] when `a` and `b` are closer
    /// than `DEGENERATE_EDGE_EPSILON`.
    pub fn new(face_normal: DVec3, a: DVec3, b: DVec3) -> MeshResult<Self> {
        if !(face_normal.is_finite() && a.is_finite() && b.is_finite()) {
            return Err(MeshError::invalid_input("edge frame has non-finite input"));
        }

        let edge = b - a;
        let length = edge.length();
        if length < DEGENERATE_EDGE_EPSILON {
            return Err(MeshError::DegenerateEdge { length });
        }

        let normal = face_normal.try_normalize().unwrap_or(FALLBACK_NORMAL);
        let tangent = edge / length;

        let cross = normal.cross(tangent);
        let outward = if cross.length() < DEGENERATE_AREA_EPSILON {
            let axis = if normal.x.abs() < 0.9 { DVec3::X } else { DVec3::Z };
            normal.cross(axis).normalize()
        } else {
            cross.normalize()
        };

        Ok(Self {
            normal,
            tangent,
            outward,
            a,
            b,
        })
    }

    /// Edge length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Converts edge-local components (x = outward, y = normal, z = tangent)
    /// into a world vector.
    #[inline]
    pub fn local_to_world(&self, local: DVec3) -> DVec3 {
        self.outward * local.x + self.normal * local.y + self.tangent * local.z
    }

    /// Splits a world vector into edge-local components.
    #[inline]
    pub fn world_to_local(&self, world: DVec3) -> DVec3 {
        DVec3::new(
            world.dot(self.outward),
            world.dot(self.normal),
            world.dot(self.tangent),
        )
    }
}
