//! # Configuration Constants
//!
//! Centralized constants for the enclosure generator. Quantization grid,
//! tessellation parameters and default enclosure dimensions live here.
//!
//! ## Categories
//!
//! - **Precision**: Vertex quantization grid
//! - **Resolution**: Arc tessellation counts
//! - **Defaults**: Enclosure dimensions used by the CLI
//! - **Output**: Mesh file framing

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Number of decimal digits kept when quantizing vertex coordinates.
///
/// Two points whose coordinates agree to this many digits (after
/// round-half-to-even) are the same vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::{QUANTIZE_DECIMALS, QUANTIZE_SCALE};
///
/// assert_eq!(10f64.powi(QUANTIZE_DECIMALS as i32), QUANTIZE_SCALE);
/// ```
pub const QUANTIZE_DECIMALS: u32 = 2;

/// Grid steps per unit, `10^QUANTIZE_DECIMALS`.
///
/// A coordinate is stored as an integer count of `1 / QUANTIZE_SCALE` steps.
///
/// # Example
///
/// ```rust
/// use config::constants::QUANTIZE_SCALE;
///
/// let steps = (1.25 * QUANTIZE_SCALE) as i64;
/// assert_eq!(steps, 125);
/// ```
pub const QUANTIZE_SCALE: f64 = 100.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Segments used to tessellate a quarter turn of an arc.
///
/// Corner arcs around a hole are emitted with `QUARTER_ARC_SEGMENTS + 1`
/// points.
///
/// # Example
///
/// ```rust
/// use config::constants::QUARTER_ARC_SEGMENTS;
///
/// let step_degrees = 90.0 / QUARTER_ARC_SEGMENTS as f64;
/// assert_eq!(step_degrees, 3.0);
/// ```
pub const QUARTER_ARC_SEGMENTS: usize = 30;

/// Segments used to tessellate a full circle (hole walls).
///
/// Must stay a multiple of four times [`QUARTER_ARC_SEGMENTS`] so every
/// corner-arc point of a hole face is also a point of the hole wall ring.
pub const FULL_ARC_SEGMENTS: usize = QUARTER_ARC_SEGMENTS * 4;

// =============================================================================
// DEFAULT DIMENSIONS (millimeters)
// =============================================================================

/// Default outer case width.
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Default outer case length.
pub const DEFAULT_LENGTH: f64 = 100.0;

/// Default shell thickness.
pub const DEFAULT_THICKNESS: f64 = 5.0;

/// Default outer case depth.
pub const DEFAULT_DEPTH: f64 = 60.0;

/// Default button diameter.
pub const DEFAULT_BUTTON: f64 = 22.0;

/// Default cable diameter.
pub const DEFAULT_CABLE: f64 = 5.0;

/// Default radial clearance added around each hole.
pub const DEFAULT_CLEARANCE: f64 = 1.0;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// First line of every emitted mesh file.
///
/// # Example
///
/// ```rust
/// use config::constants::OUTPUT_HEADER;
///
/// assert!(OUTPUT_HEADER.starts_with('#'));
/// ```
pub const OUTPUT_HEADER: &str = "# Auto-generated";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the number of arc segments for a quarter or a full turn.
///
/// # Example
///
/// ```rust
/// use config::constants::arc_segments;
///
/// assert_eq!(arc_segments(false), 30);
/// assert_eq!(arc_segments(true), 120);
/// ```
#[inline]
pub fn arc_segments(full: bool) -> usize {
    if full {
        FULL_ARC_SEGMENTS
    } else {
        QUARTER_ARC_SEGMENTS
    }
}
