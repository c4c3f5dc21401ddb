//! # Chamfer Ring
//!
//! The 45° bevel around a panel, joining the outer rectangle at `height`
//! to the inset rectangle at `height - thickness`.
//!
//! Where two panels meet, their bevels coincide with opposite winding and
//! cancel in the mesh, leaving a mitred joint. For that to work both panels
//! must triangulate the shared strip identically. Each edge strip is split
//! at the edge midpoint and every half uses the diagonal from the outer
//! midpoint to the inner corner. Outer/inner and corner/midpoint are
//! properties of the shared edge itself, so the neighbouring panel picks the
//! same diagonal whatever frame it was generated in.

use glam::DVec3;

use crate::primitives::Polygon;
use crate::transform::transform;

/// Generates the chamfer ring of a `width x length` panel.
///
/// Faces point away from the panel body: outward across each edge and
/// down toward the inset side.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::primitives::chamfer_ring;
///
/// let ring = chamfer_ring(100.0, 60.0, 5.0, 0.0);
/// assert_eq!(ring.len(), 16);
/// ```
pub fn chamfer_ring(width: f64, length: f64, thickness: f64, height: f64) -> Vec<Polygon> {
    let hw = width * 0.5;
    let hl = length * 0.5;

    let along_x = edge_strip(hw, hl, thickness, height);
    let along_y = edge_strip(hl, hw, thickness, height);

    let mut ring = along_x.clone();
    ring.extend(transform(&along_x, |p| DVec3::new(p.x, -p.y, p.z), true));
    ring.extend(transform(&along_y, |p| DVec3::new(p.y, p.x, p.z), true));
    ring.extend(transform(&along_y, |p| DVec3::new(-p.y, p.x, p.z), false));
    ring
}

/// Bevel strip along the `y = -half_across` edge, spanning
/// `x` in `[-half_along, half_along]`.
fn edge_strip(half_along: f64, half_across: f64, thickness: f64, height: f64) -> Vec<Polygon> {
    let inset = height - thickness;
    let outer_corner = DVec3::new(-half_along, -half_across, height);
    let outer_mid = DVec3::new(0.0, -half_across, height);
    let inner_corner = DVec3::new(-half_along + thickness, -half_across + thickness, inset);
    let inner_mid = DVec3::new(0.0, -half_across + thickness, inset);

    let half = [
        Polygon::Triangle([outer_mid, outer_corner, inner_corner]),
        Polygon::Triangle([outer_mid, inner_corner, inner_mid]),
    ];

    let mut strip = half.to_vec();
    strip.extend(transform(&half, |p| DVec3::new(-p.x, p.y, p.z), true));
    strip
}
