//! # Transform Layer
//!
//! Applies point maps to generated polygons.
//!
//! This is the single mechanism used to place panels: translation moves a
//! panel to its height, axis permutations turn the generic panel into a side
//! wall, and mirrors produce opposite walls and undersides. Any map with a
//! reflection flips orientation, so it must be applied with `inverting` set
//! to keep faces pointing outward.

use glam::{DAffine3, DVec3};

use crate::primitives::Polygon;

/// Maps every point of every polygon, optionally reversing each polygon's
/// winding.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::primitives::Polygon;
/// use enclosure_mesh::transform::transform;
/// use glam::DVec3;
///
/// let tri = [Polygon::Triangle([DVec3::ZERO, DVec3::X, DVec3::Y])];
/// let mirrored = transform(&tri, |p| DVec3::new(-p.x, p.y, p.z), true);
/// assert!(mirrored[0].area_normal().z > 0.0);
/// ```
pub fn transform(
    polygons: &[Polygon],
    map: impl Fn(DVec3) -> DVec3,
    inverting: bool,
) -> Vec<Polygon> {
    polygons
        .iter()
        .map(|polygon| {
            let mapped = polygon.map(&map);
            if inverting {
                mapped.reversed()
            } else {
                mapped
            }
        })
        .collect()
}

/// Applies an affine map, inverting winding when it contains a reflection.
pub fn transform_affine(polygons: &[Polygon], affine: &DAffine3) -> Vec<Polygon> {
    transform(
        polygons,
        |p| affine.transform_point3(p),
        is_reflection(affine),
    )
}

/// Returns true if the linear part of the map has a negative determinant.
#[inline]
pub fn is_reflection(affine: &DAffine3) -> bool {
    affine.matrix3.determinant() < 0.0
}

/// Shifts polygons along Z.
pub fn lift(polygons: &[Polygon], dz: f64) -> Vec<Polygon> {
    transform(polygons, |p| p + DVec3::Z * dz, false)
}

// =============================================================================
// PLACEMENTS
// =============================================================================

/// Named placements of a panel's local frame in the enclosure frame.
///
/// The enclosure occupies `[-w/2, w/2] x [-l/2, l/2] x [0, d]`. Each panel is
/// generated around the origin with its outer face along local +Z; the
/// placement sends local +Z to the panel's outward direction. Side walls are
/// generated with local Y spanning the depth.
pub struct Placement;

impl Placement {
    /// Lid surface insert: flipped about the top plane `z = depth`.
    pub fn surface(depth: f64) -> DAffine3 {
        DAffine3::from_cols(DVec3::X, DVec3::Y, -DVec3::Z, DVec3::new(0.0, 0.0, depth))
    }

    /// Case bottom: flipped so the outer face looks down at `z = 0`.
    pub fn bottom() -> DAffine3 {
        DAffine3::from_cols(DVec3::X, DVec3::Y, -DVec3::Z, DVec3::ZERO)
    }

    /// Front wall at `y = -length/2`.
    pub fn front(length: f64, depth: f64) -> DAffine3 {
        DAffine3::from_cols(
            DVec3::X,
            DVec3::Z,
            -DVec3::Y,
            DVec3::new(0.0, -length * 0.5, depth * 0.5),
        )
    }

    /// Back wall at `y = length/2`.
    pub fn back(length: f64, depth: f64) -> DAffine3 {
        DAffine3::from_cols(
            DVec3::X,
            DVec3::Z,
            DVec3::Y,
            DVec3::new(0.0, length * 0.5, depth * 0.5),
        )
    }

    /// Right wall at `x = width/2`.
    pub fn right(width: f64, depth: f64) -> DAffine3 {
        DAffine3::from_cols(
            DVec3::Y,
            DVec3::Z,
            DVec3::X,
            DVec3::new(width * 0.5, 0.0, depth * 0.5),
        )
    }

    /// Left wall at `x = -width/2`.
    pub fn left(width: f64, depth: f64) -> DAffine3 {
        DAffine3::from_cols(
            DVec3::Y,
            DVec3::Z,
            -DVec3::X,
            DVec3::new(-width * 0.5, 0.0, depth * 0.5),
        )
    }
}
