//! # Rigid Placement
//!
//! Yaw-about-up rotation followed by a translation. Every composite part is
//! built in a canonical local frame and moved into the footprint with one of
//! these.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// A rotation about +Y (degrees) followed by a translation.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use road_mesh::geometry::RigidPlacement;
///
/// let placement = RigidPlacement::new(180.0, DVec3::new(10.0, 0.0, 0.0));
/// let moved = placement.apply(DVec3::X);
/// assert!((moved - DVec3::new(9.0, 0.0, 0.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidPlacement {
    /// Rotation about the +Y axis in degrees
    #[serde(default)]
    pub yaw_degrees: f64,
    /// Translation applied after the rotation
    #[serde(default = "zero_translation")]
    pub translation: DVec3,
}

fn zero_translation() -> DVec3 {
    DVec3::ZERO
}

impl Default for RigidPlacement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidPlacement {
    /// The placement that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        yaw_degrees: 0.0,
        translation: DVec3::ZERO,
    };

    /// Creates a placement from a yaw angle and a translation.
    pub fn new(yaw_degrees: f64, translation: DVec3) -> Self {
        Self {
            yaw_degrees,
            translation,
        }
    }

    #[inline]
    fn rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.yaw_degrees.to_radians())
    }

    /// Moves a point into the placed frame.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation() * point + self.translation
    }

    /// Rotates a direction; translation does not apply to vectors.
    #[inline]
    pub fn apply_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation() * vector
    }

    /// Undoes [`RigidPlacement::apply`].
    #[inline]
    pub fn apply_inverse(&self, point: DVec3) -> DVec3 {
        self.rotation().inverse() * (point - self.translation)
    }

    /// Moves every point of a set in place.
    pub fn apply_all(&self, points: &mut [DVec3]) {
        let rotation = self.rotation();
        for point in points {
            *point = rotation * *point + self.translation;
        }
    }

    /// Composes two placements: `self` first, then `outer`.
    ///
    /// Both rotate about the same axis, so the yaws add.
    pub fn then(&self, outer: &RigidPlacement) -> RigidPlacement {
        RigidPlacement {
            yaw_degrees: self.yaw_degrees + outer.yaw_degrees,
            translation: outer.apply(self.translation),
        }
    }
}
