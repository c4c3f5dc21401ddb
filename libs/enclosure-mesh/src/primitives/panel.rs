//! # Panel Primitive
//!
//! Generates one chamfered enclosure panel: a slab whose outer face lies at
//! `height`, whose inset face lies one thickness below, and whose rim is the
//! chamfer ring. A panel may carry a centered circular hole.

use glam::DVec3;
use tracing::{debug, instrument};

use super::{chamfer_ring, face_with_hole, four_quadrants, hole_wall, Polygon};
use crate::transform::{lift, transform};

/// Creates a plain `width x length` face at `z = 0`, looking along +Z.
///
/// The face is split into four quadrants through the edge midpoints so that
/// its boundary has the same vertices as the chamfer ring and hole faces.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::primitives::flat_face;
///
/// let face = flat_face(10.0, 20.0);
/// let area: f64 = face.iter().map(|p| p.area_normal().z * 0.5).sum();
/// assert_eq!(area, 200.0);
/// ```
pub fn flat_face(width: f64, length: f64) -> Vec<Polygon> {
    let hw = width * 0.5;
    let hl = length * 0.5;
    let quadrant = [Polygon::Quad([
        DVec3::new(-hw, -hl, 0.0),
        DVec3::new(0.0, -hl, 0.0),
        DVec3::ZERO,
        DVec3::new(-hw, 0.0, 0.0),
    ])];
    four_quadrants(&quadrant)
}

/// Creates a closed chamfered panel.
///
/// # Arguments
///
/// * `width`, `length` - Outer rectangle
/// * `thickness` - Slab thickness, also the chamfer inset
/// * `hole` - Radius of a centered hole, if any
/// * `height` - Z of the outer face
///
/// # Returns
///
/// Outward-facing polygons: the outer face looks along +Z, the inset face
/// along -Z, the chamfer outward and down, and the hole wall (if any) toward
/// the hole axis.
#[instrument(level = "debug")]
pub fn panel(width: f64, length: f64, thickness: f64, hole: Option<f64>, height: f64) -> Vec<Polygon> {
    // Halves of the inset must equal the chamfer's `half - thickness` bit
    // for bit, or tie-valued corners can quantize apart
    let inset_width = (width * 0.5 - thickness) * 2.0;
    let inset_length = (length * 0.5 - thickness) * 2.0;
    let inset = height - thickness;

    let mut polygons = chamfer_ring(width, length, thickness, height);

    match hole {
        Some(radius) => {
            polygons.extend(lift(&face_with_hole(width, length, radius), height));
            polygons.extend(transform(
                &face_with_hole(inset_width, inset_length, radius),
                |p| p + DVec3::Z * inset,
                true,
            ));
            polygons.extend(lift(&hole_wall(radius, thickness), inset));
        }
        None => {
            polygons.extend(lift(&flat_face(width, length), height));
            polygons.extend(transform(
                &flat_face(inset_width, inset_length),
                |p| p + DVec3::Z * inset,
                true,
            ));
        }
    }

    debug!(polygons = polygons.len(), "generated panel");
    polygons
}
