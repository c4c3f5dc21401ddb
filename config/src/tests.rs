//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_quantize_scale_matches_decimals() {
    assert_eq!(10u32.pow(QUANTIZE_DECIMALS) as f64, QUANTIZE_SCALE);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_full_arc_is_four_quarters() {
    assert_eq!(FULL_ARC_SEGMENTS, 4 * QUARTER_ARC_SEGMENTS);
}

#[test]
fn test_quarter_arc_step_is_three_degrees() {
    // Hole wall rings and corner arcs share the same 3 degree grid
    assert_eq!(90 % QUARTER_ARC_SEGMENTS, 0);
    assert_eq!(360 % FULL_ARC_SEGMENTS, 0);
}

// =============================================================================
// DEFAULT DIMENSION TESTS
// =============================================================================

#[test]
fn test_default_button_hole_fits_lid() {
    let hole = DEFAULT_BUTTON + 2.0 * DEFAULT_CLEARANCE;
    let inset = DEFAULT_WIDTH.min(DEFAULT_LENGTH) - 2.0 * DEFAULT_THICKNESS;
    assert!(hole < inset);
}

#[test]
fn test_default_cable_hole_fits_wall() {
    let hole = DEFAULT_CABLE + 2.0 * DEFAULT_CLEARANCE;
    let inset = DEFAULT_WIDTH.min(DEFAULT_DEPTH) - 2.0 * DEFAULT_THICKNESS;
    assert!(hole < inset);
}
