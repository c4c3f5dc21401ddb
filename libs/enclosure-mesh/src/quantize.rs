//! # Coordinate Quantizer
//!
//! Snaps coordinates to a fixed decimal grid so that points which are equal
//! up to floating-point noise share one vertex.
//!
//! Rounding is round-half-to-even on the exact binary value of the input,
//! the way an exact-decimal type would round it. Multiplying by the grid
//! scale alone is not enough: `x * 100.0` can land on an exact `.5` even
//! when `x` itself is slightly above or below the tie.

use std::fmt;

use config::constants::{QUANTIZE_DECIMALS, QUANTIZE_SCALE};
use glam::DVec3;

/// A coordinate snapped to the quantization grid.
///
/// Stored as an integer number of grid steps (hundredths with the default
/// grid), so equality and hashing are exact.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::quantize::quantize;
///
/// let q = quantize(-47.5);
/// assert_eq!(q.steps(), -4750);
/// assert_eq!(q.to_string(), "-47.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantized(i64);

/// A point with all three coordinates quantized; the vertex registry key.
pub type QuantizedPoint = [Quantized; 3];

impl Quantized {
    /// Builds a value directly from a grid step count.
    #[inline]
    pub const fn from_steps(steps: i64) -> Self {
        Self(steps)
    }

    /// Returns the number of grid steps.
    #[inline]
    pub const fn steps(self) -> i64 {
        self.0
    }

    /// Converts back to a float.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / QUANTIZE_SCALE
    }
}

impl fmt::Display for Quantized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = 10u64.pow(QUANTIZE_DECIMALS);
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / unit,
            magnitude % unit,
            width = QUANTIZE_DECIMALS as usize
        )
    }
}

/// Quantizes a single coordinate.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::quantize::quantize;
///
/// // Ties go to even
/// assert_eq!(quantize(0.125).steps(), 12);
/// assert_eq!(quantize(0.375).steps(), 38);
/// // 2.675 is stored as 2.67499999..., so it rounds down
/// assert_eq!(quantize(2.675).steps(), 267);
/// ```
pub fn quantize(value: f64) -> Quantized {
    let scaled = value * QUANTIZE_SCALE;
    // Exact residual of the product: value * SCALE == scaled + residual
    let residual = value.mul_add(QUANTIZE_SCALE, -scaled);
    let floor = scaled.floor();

    let rounded = if scaled - floor == 0.5 && residual != 0.0 {
        if residual > 0.0 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        scaled.round_ties_even()
    };

    Quantized(rounded as i64)
}

/// Quantizes the three coordinates of a point independently.
#[inline]
pub fn quantize_point(point: DVec3) -> QuantizedPoint {
    [quantize(point.x), quantize(point.y), quantize(point.z)]
}

/// Converts a quantized point back to floats.
#[inline]
pub fn dequantize_point(point: &QuantizedPoint) -> DVec3 {
    DVec3::new(point[0].to_f64(), point[1].to_f64(), point[2].to_f64())
}
