//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between tolerance constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_position_epsilon_is_positive() {
    assert!(POSITION_EPSILON > 0.0, "POSITION_EPSILON must be positive");
}

#[test]
fn test_degenerate_thresholds_below_weld_distance() {
    assert!(DEGENERATE_EDGE_EPSILON < POSITION_EPSILON);
    assert!(DEGENERATE_AREA_EPSILON < DEGENERATE_EDGE_EPSILON);
}

// =============================================================================
// EXTRUSION TESTS
// =============================================================================

#[test]
fn test_extrude_angle_clamp_is_open_interval() {
    assert!(MIN_EXTRUDE_ANGLE_DEGREES > 0.0);
    assert!(MAX_EXTRUDE_ANGLE_DEGREES < 90.0);
    assert!(MIN_EXTRUDE_ANGLE_DEGREES < MAX_EXTRUDE_ANGLE_DEGREES);
}
