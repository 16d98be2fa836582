//! # Edge Extrusion
//!
//! Grows a new quad off an existing edge. Every parameterization reduces to
//! one displacement per edge endpoint, and all of them return the loop
//! `[a, a', b', b]`, so the far edge `a' -> b'` is edge 1 of the new quad.
//!
//! ## Parameterizations
//!
//! | Spec | Displacement |
//! |------|--------------|
//! | [`ExtrudeSpec::AngleAndLength`] | `n * rise + o * lateral` |
//! | [`ExtrudeSpec::DirectionAndDistance`] | unit direction times distance |
//! | [`ExtrudeSpec::AxisOffsets`] | raw offset, optionally without tangent part |
//! | [`ExtrudeSpec::ToWorldHeight`] | horizontal move, then Y snapped per endpoint |
//!
//! Here `n`, `o` and `t` are the normal, outward and tangent of the
//! [`EdgeFrame`].

mod frame;

#[cfg(test)]
mod tests;

pub use frame::EdgeFrame;

use crate::error::{MeshError, MeshResult};
use config::constants::{DEGENERATE_EDGE_EPSILON, MAX_EXTRUDE_ANGLE_DEGREES, MIN_EXTRUDE_ANGLE_DEGREES};
use glam::DVec3;

// =============================================================================
// PARAMETER TYPES
// =============================================================================

/// What an extrusion angle is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleReference {
    /// Angle above the face plane: `rise = L sin(a)`, `lateral = L cos(a)`
    #[default]
    FromPlane,
    /// Angle away from the face normal: `rise = L cos(a)`, `lateral = L sin(a)`
    FromNormal,
}

/// Frame in which an extrusion direction is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionSpace {
    /// World axes
    #[default]
    World,
    /// Edge axes: x = outward, y = normal, z = tangent
    EdgeLocal,
}

/// One of the four extrusion parameterizations, as a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtrudeSpec {
    /// Angle plus slant length in the normal/outward plane.
    AngleAndLength {
        /// Degrees, clamped to the open interval (0, 90)
        angle_degrees: f64,
        /// Slant length
        length: f64,
        /// What the angle is measured from
        reference: AngleReference,
        /// Extrude inward instead of outward
        flip_outward: bool,
    },
    /// Explicit direction scaled to a distance.
    DirectionAndDistance {
        /// Direction, need not be unit length
        direction: DVec3,
        /// Frame of `direction`
        space: DirectionSpace,
        /// Distance travelled
        distance: f64,
        /// Remove the tangent component before normalizing
        clamp_to_edge_plane: bool,
    },
    /// World offset applied as-is.
    AxisOffsets {
        /// World-space displacement
        offset: DVec3,
        /// Remove the tangent component
        project_to_edge_plane: bool,
    },
    /// Horizontal move followed by an exact height snap.
    ToWorldHeight {
        /// Direction whose horizontal part is used
        outward: DVec3,
        /// Horizontal distance
        out_amount: f64,
        /// Final Y of both far points
        target_height: f64,
    },
}

impl ExtrudeSpec {
    /// Extrudes the edge described by `frame`.
    pub fn apply(&self, frame: &EdgeFrame) -> MeshResult<[DVec3; 4]> {
        match *self {
            ExtrudeSpec::AngleAndLength {
                angle_degrees,
                length,
                reference,
                flip_outward,
            } => by_angle_and_length(frame, angle_degrees, length, reference, flip_outward),
            ExtrudeSpec::DirectionAndDistance {
                direction,
                space,
                distance,
                clamp_to_edge_plane,
            } => by_direction_and_distance(frame, direction, space, distance, clamp_to_edge_plane),
            ExtrudeSpec::AxisOffsets {
                offset,
                project_to_edge_plane,
            } => by_axis_offsets(frame, offset, project_to_edge_plane),
            ExtrudeSpec::ToWorldHeight {
                outward,
                out_amount,
                target_height,
            } => to_world_height(frame, outward, out_amount, target_height),
        }
    }
}

/// Builds the frame for `a -> b` and extrudes it.
pub fn extrude(face_normal: DVec3, a: DVec3, b: DVec3, spec: &ExtrudeSpec) -> MeshResult<[DVec3; 4]> {
    let frame = EdgeFrame::new(face_normal, a, b)?;
    spec.apply(&frame)
}

// =============================================================================
// PARAMETERIZATIONS
// =============================================================================

/// Extrudes at an angle with a slant length.
///
/// # Errors
///
/// Returns [`MeshError::InvalidInput`] for a negative or non-finite length
/// or a non-finite angle.
pub fn by_angle_and_length(
    frame: &EdgeFrame,
    angle_degrees: f64,
    length: f64,
    reference: AngleReference,
    flip_outward: bool,
) -> MeshResult<[DVec3; 4]> {
    check_amount("length", length)?;
    if !angle_degrees.is_finite() {
        return Err(MeshError::invalid_input("angle must be finite"));
    }

    let theta = angle_degrees
        .clamp(MIN_EXTRUDE_ANGLE_DEGREES, MAX_EXTRUDE_ANGLE_DEGREES)
        .to_radians();
    let (rise, lateral) = match reference {
        AngleReference::FromPlane => (length * theta.sin(), length * theta.cos()),
        AngleReference::FromNormal => (length * theta.cos(), length * theta.sin()),
    };
    let outward = if flip_outward { -frame.outward } else { frame.outward };

    let displacement = frame.normal * rise + outward * lateral;
    Ok(extrude_core(frame, |p| p + displacement))
}

/// Extrudes along a direction for a distance.
///
/// # Errors
///
/// Returns [`MeshError::ZeroDirection`] when the direction vanishes (after
/// clamping) and [`MeshError::InvalidInput`] for a negative distance.
pub fn by_direction_and_distance(
    frame: &EdgeFrame,
    direction: DVec3,
    space: DirectionSpace,
    distance: f64,
    clamp_to_edge_plane: bool,
) -> MeshResult<[DVec3; 4]> {
    check_amount("distance", distance)?;
    if !direction.is_finite() {
        return Err(MeshError::invalid_input("direction must be finite"));
    }

    let mut world = match space {
        DirectionSpace::World => direction,
        DirectionSpace::EdgeLocal => frame.local_to_world(direction),
    };
    if clamp_to_edge_plane {
        world -= frame.tangent * world.dot(frame.tangent);
    }

    let unit = nonzero_unit(world)?;
    let displacement = unit * distance;
    Ok(extrude_core(frame, |p| p + displacement))
}

/// Extrudes by a raw world offset, optionally dropping its tangent part.
///
/// Use [`EdgeFrame::world_to_local`] to read the normal/outward/tangent
/// split of an offset.
pub fn by_axis_offsets(
    frame: &EdgeFrame,
    offset: DVec3,
    project_to_edge_plane: bool,
) -> MeshResult<[DVec3; 4]> {
    if !offset.is_finite() {
        return Err(MeshError::invalid_input("offset must be finite"));
    }

    let displacement = if project_to_edge_plane {
        offset - frame.tangent * offset.dot(frame.tangent)
    } else {
        offset
    };
    Ok(extrude_core(frame, |p| p + displacement))
}

/// Moves both endpoints `out_amount` along the horizontal part of `outward`,
/// then sets their Y to exactly `target_height`.
///
/// # Errors
///
/// Returns [`MeshError::ZeroDirection`] when `outward` has no horizontal
/// part.
pub fn to_world_height(
    frame: &EdgeFrame,
    outward: DVec3,
    out_amount: f64,
    target_height: f64,
) -> MeshResult<[DVec3; 4]> {
    if !(outward.is_finite() && out_amount.is_finite() && target_height.is_finite()) {
        return Err(MeshError::invalid_input("world-height extrusion needs finite input"));
    }

    let lateral = nonzero_unit(DVec3::new(outward.x, 0.0, outward.z))? * out_amount;
    let snap = |p: DVec3| {
        let moved = p + lateral;
        DVec3::new(moved.x, target_height, moved.z)
    };

    Ok(extrude_core(frame, snap))
}

// =============================================================================
// CORE
// =============================================================================

/// Maps each endpoint to its far point and returns `[a, a', b', b]`.
fn extrude_core(frame: &EdgeFrame, far_point: impl Fn(DVec3) -> DVec3) -> [DVec3; 4] {
    [frame.a, far_point(frame.a), far_point(frame.b), frame.b]
}

fn check_amount(name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::invalid_input(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}

fn nonzero_unit(v: DVec3) -> MeshResult<DVec3> {
    if v.length() < DEGENERATE_EDGE_EPSILON {
        return Err(MeshError::ZeroDirection);
    }
    Ok(v.normalize())
}
