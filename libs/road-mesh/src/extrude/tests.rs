//! Tests for the edge frame and the four extrusion parameterizations.

use super::*;
use approx::assert_relative_eq;

/// Edge along +X on an upward face; outward is -Z.
fn floor_edge() -> EdgeFrame {
    EdgeFrame::new(DVec3::Y, DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)).unwrap()
}

// =============================================================================
// FRAME
// =============================================================================

#[test]
fn test_frame_axes_are_orthonormal() {
    let frame = floor_edge();
    assert_eq!(frame.normal, DVec3::Y);
    assert_eq!(frame.tangent, DVec3::X);
    assert_relative_eq!(frame.outward.z, -1.0, epsilon = 1e-12);
    assert_relative_eq!(frame.outward.dot(frame.normal), 0.0, epsilon = 1e-12);
    assert_relative_eq!(frame.outward.dot(frame.tangent), 0.0, epsilon = 1e-12);
    assert_relative_eq!(frame.length(), 2.0);
}

#[test]
fn test_frame_zero_normal_falls_back_to_up() {
    let frame = EdgeFrame::new(DVec3::ZERO, DVec3::ZERO, DVec3::X).unwrap();
    assert_eq!(frame.normal, DVec3::Y);
}

#[test]
fn test_frame_tangent_along_normal_uses_fallback_axis() {
    let frame = EdgeFrame::new(DVec3::Y, DVec3::ZERO, DVec3::Y).unwrap();
    assert_relative_eq!(frame.outward.length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(frame.outward.dot(frame.normal), 0.0, epsilon = 1e-12);
}

#[test]
fn test_frame_rejects_degenerate_edge() {
    let err = EdgeFrame::new(DVec3::Y, DVec3::ONE, DVec3::ONE).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateEdge { .. }));
}

#[test]
fn test_local_world_conversion() {
    let frame = floor_edge();
    let local = DVec3::new(1.0, 2.0, 3.0);
    let back = frame.world_to_local(frame.local_to_world(local));
    assert_relative_eq!(back.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(back.y, 2.0, epsilon = 1e-12);
    assert_relative_eq!(back.z, 3.0, epsilon = 1e-12);
}

// =============================================================================
// ANGLE AND LENGTH
// =============================================================================

#[test]
fn test_thirty_degrees_from_plane() {
    let frame = floor_edge();
    let [a, a2, b2, b] = by_angle_and_length(&frame, 30.0, 2.0, AngleReference::FromPlane, false).unwrap();
    assert_eq!(a, frame.a);
    assert_eq!(b, frame.b);

    let d = a2 - a;
    assert_relative_eq!(d.y, 1.0, epsilon = 1e-4);
    assert_relative_eq!(d.dot(frame.outward), 3.0_f64.sqrt(), epsilon = 1e-4);
    assert_relative_eq!((b2 - b).distance(d), 0.0, epsilon = 1e-12);
}

#[test]
fn test_from_normal_swaps_components() {
    let frame = floor_edge();
    let [a, a2, ..] = by_angle_and_length(&frame, 30.0, 2.0, AngleReference::FromNormal, false).unwrap();
    let d = a2 - a;
    assert_relative_eq!(d.y, 3.0_f64.sqrt(), epsilon = 1e-4);
    assert_relative_eq!(d.dot(frame.outward), 1.0, epsilon = 1e-4);
}

#[test]
fn test_flip_outward_goes_inward() {
    let frame = floor_edge();
    let [a, a2, ..] = by_angle_and_length(&frame, 45.0, 1.0, AngleReference::FromPlane, true).unwrap();
    assert!((a2 - a).dot(frame.outward) < 0.0);
}

#[test]
fn test_angle_is_clamped_inside_open_interval() {
    let frame = floor_edge();
    let [a, a2, ..] = by_angle_and_length(&frame, 90.0, 1.0, AngleReference::FromPlane, false).unwrap();
    assert!((a2 - a).dot(frame.outward) > 0.0);
    let [a, a2, ..] = by_angle_and_length(&frame, -10.0, 1.0, AngleReference::FromPlane, false).unwrap();
    assert!((a2 - a).y > 0.0);
}

#[test]
fn test_negative_length_is_invalid() {
    let err = by_angle_and_length(&floor_edge(), 30.0, -1.0, AngleReference::FromPlane, false).unwrap_err();
    assert!(matches!(err, MeshError::InvalidInput { .. }));
}

// =============================================================================
// DIRECTION AND DISTANCE
// =============================================================================

#[test]
fn test_world_direction_is_normalized() {
    let [a, a2, ..] = by_direction_and_distance(
        &floor_edge(),
        DVec3::new(0.0, -10.0, 0.0),
        DirectionSpace::World,
        0.5,
        true,
    )
    .unwrap();
    assert_relative_eq!(a2.distance(a + DVec3::new(0.0, -0.5, 0.0)), 0.0, epsilon = 1e-12);
}

#[test]
fn test_edge_local_direction() {
    let frame = floor_edge();
    let [a, a2, ..] =
        by_direction_and_distance(&frame, DVec3::X, DirectionSpace::EdgeLocal, 2.0, false).unwrap();
    assert_relative_eq!((a2 - a).distance(frame.outward * 2.0), 0.0, epsilon = 1e-12);
}

#[test]
fn test_clamped_tangent_direction_is_zero() {
    let err = by_direction_and_distance(&floor_edge(), DVec3::X, DirectionSpace::World, 1.0, true).unwrap_err();
    assert_eq!(err, MeshError::ZeroDirection);

    let err = by_direction_and_distance(&floor_edge(), DVec3::ZERO, DirectionSpace::World, 1.0, false).unwrap_err();
    assert_eq!(err, MeshError::ZeroDirection);
}

// =============================================================================
// AXIS OFFSETS
// =============================================================================

#[test]
fn test_axis_offsets_projection_drops_tangent() {
    let frame = floor_edge();
    let offset = DVec3::new(0.7, -0.05, -0.35);

    let [a, a2, ..] = by_axis_offsets(&frame, offset, false).unwrap();
    assert_eq!(a2 - a, offset);

    let [a, a2, ..] = by_axis_offsets(&frame, offset, true).unwrap();
    let local = frame.world_to_local(a2 - a);
    assert_relative_eq!(local.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(local.x, 0.35, epsilon = 1e-12);
    assert_relative_eq!(local.y, -0.05, epsilon = 1e-12);
}

// =============================================================================
// WORLD HEIGHT
// =============================================================================

#[test]
fn test_world_height_snaps_exactly() {
    // Sloped edge: endpoints at different heights.
    let frame = EdgeFrame::new(DVec3::Y, DVec3::new(0.0, 1.3, 0.0), DVec3::new(2.0, 2.7, 0.0)).unwrap();
    let [_, a2, b2, _] = to_world_height(&frame, DVec3::new(0.0, 3.0, -4.0), 0.5, 5.0).unwrap();
    assert_eq!(a2.y, 5.0);
    assert_eq!(b2.y, 5.0);
    assert_relative_eq!(a2.z, -0.5, epsilon = 1e-12);
    assert_relative_eq!(b2.x, 2.0, epsilon = 1e-12);
}

#[test]
fn test_world_height_needs_horizontal_direction() {
    let err = to_world_height(&floor_edge(), DVec3::Y, 1.0, 0.0).unwrap_err();
    assert_eq!(err, MeshError::ZeroDirection);
}

// =============================================================================
// DISPATCH
// =============================================================================

#[test]
fn test_extrude_spec_dispatches() {
    let spec = ExtrudeSpec::ToWorldHeight {
        outward: DVec3::NEG_Z,
        out_amount: 1.0,
        target_height: -2.0,
    };
    let quad = extrude(DVec3::Y, DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), &spec).unwrap();
    assert_eq!(quad[1], DVec3::new(0.0, -2.0, -1.0));
    assert_eq!(quad[2], DVec3::new(2.0, -2.0, -1.0));
}

#[test]
fn test_extrude_propagates_degenerate_edge() {
    let spec = ExtrudeSpec::AxisOffsets {
        offset: DVec3::Y,
        project_to_edge_plane: false,
    };
    assert!(matches!(
        extrude(DVec3::Y, DVec3::ZERO, DVec3::ZERO, &spec),
        Err(MeshError::DegenerateEdge { .. })
    ));
}
