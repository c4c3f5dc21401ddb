//! # Hole Primitives
//!
//! Generates the flat face of a panel with a centered circular cut-out and
//! the cylindrical wall lining the cut-out.

use glam::DVec3;

use super::{arc_points, four_quadrants, planar, Polygon};

/// Creates the (-x, -y) quadrant of a `width x length` face with a hole.
///
/// The boundary runs from the bottom edge midpoint, around the quarter arc
/// of the hole, to the left edge midpoint; the quadrant is a triangle fan
/// from the outer corner over that path. Faces look along +Z at `z = 0`.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::primitives::corner_with_hole;
///
/// // One triangle per path segment: 31 arc points plus two edge midpoints
/// let fan = corner_with_hole(100.0, 100.0, 12.0);
/// assert_eq!(fan.len(), 32);
/// ```
pub fn corner_with_hole(width: f64, length: f64, radius: f64) -> Vec<Polygon> {
    let hw = width * 0.5;
    let hl = length * 0.5;
    let apex = DVec3::new(-hw, -hl, 0.0);

    let mut path = vec![DVec3::new(0.0, -hl, 0.0)];
    path.extend(arc_points(radius, false).into_iter().map(planar));
    path.push(DVec3::new(-hw, 0.0, 0.0));

    path.windows(2)
        .map(|pair| Polygon::Triangle([apex, pair[0], pair[1]]))
        .collect()
}

/// Creates a full `width x length` face at `z = 0` with a centered hole.
///
/// The quadrant fan is tiled onto all four quadrants; faces look along +Z.
pub fn face_with_hole(width: f64, length: f64, radius: f64) -> Vec<Polygon> {
    four_quadrants(&corner_with_hole(width, length, radius))
}

/// Creates the wall of a cylindrical hole from `z = 0` to `z = depth`.
///
/// Consecutive points of the bottom and top rings are joined by quads
/// `(b[i], b[i+1], t[i+1], t[i])`. The rings run clockwise seen from +Z,
/// which makes every quad face the hole axis, i.e. away from the material
/// around the hole.
pub fn hole_wall(radius: f64, depth: f64) -> Vec<Polygon> {
    let ring = arc_points(radius, true);

    ring.windows(2)
        .map(|pair| {
            let (p0, p1) = (planar(pair[0]), planar(pair[1]));
            let top = DVec3::Z * depth;
            Polygon::Quad([p0, p1, p1 + top, p0 + top])
        })
        .collect()
}
