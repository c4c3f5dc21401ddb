//! # Primitives
//!
//! Parametric sub-surface generators for enclosure panels.
//!
//! Every generator is a pure function returning polygons in the panel's
//! local frame: the panel is centered on the origin, its outer face looks
//! along +Z and its inset face lies one thickness below. Placement into the
//! assembly is done afterwards with [`crate::transform`].

pub mod arc;
pub mod chamfer;
pub mod hole;
pub mod panel;

pub use arc::arc_points;
pub use chamfer::chamfer_ring;
pub use hole::{corner_with_hole, face_with_hole, hole_wall};
pub use panel::{flat_face, panel};

use glam::{DVec2, DVec3};

use crate::transform::transform;

/// A generated face before it is registered in a mesh.
///
/// The point order defines the winding; the outward normal follows the
/// right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Polygon {
    /// Three corners.
    Triangle([DVec3; 3]),
    /// Four corners, split into `(a, b, c)` and `(a, c, d)` when meshed.
    Quad([DVec3; 4]),
}

impl Polygon {
    /// Returns the corners in winding order.
    pub fn points(&self) -> &[DVec3] {
        match self {
            Polygon::Triangle(points) => points,
            Polygon::Quad(points) => points,
        }
    }

    /// Applies a point map to every corner.
    pub fn map(&self, f: impl Fn(DVec3) -> DVec3) -> Self {
        match *self {
            Polygon::Triangle(points) => Polygon::Triangle(points.map(f)),
            Polygon::Quad(points) => Polygon::Quad(points.map(f)),
        }
    }

    /// Returns the polygon with its corner order reversed.
    pub fn reversed(&self) -> Self {
        match *self {
            Polygon::Triangle([a, b, c]) => Polygon::Triangle([c, b, a]),
            Polygon::Quad([a, b, c, d]) => Polygon::Quad([d, c, b, a]),
        }
    }

    /// Area-weighted normal (Newell's method).
    ///
    /// Its length is twice the polygon area for planar polygons.
    pub fn area_normal(&self) -> DVec3 {
        let points = self.points();
        points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| a.cross(*b))
            .sum()
    }
}

/// Lifts a 2D point into the z = 0 plane.
#[inline]
pub(crate) fn planar(point: DVec2) -> DVec3 {
    point.extend(0.0)
}

/// Tiles a quadrant built in the (-x, -y) corner onto all four quadrants.
///
/// The two mirrored copies are inverted to stay outward-facing; the copy
/// mirrored across both axes is a rotation and keeps its winding.
pub(crate) fn four_quadrants(quadrant: &[Polygon]) -> Vec<Polygon> {
    let mut polygons = quadrant.to_vec();
    polygons.extend(transform(quadrant, |p| DVec3::new(-p.x, p.y, p.z), true));
    polygons.extend(transform(quadrant, |p| DVec3::new(p.x, -p.y, p.z), true));
    polygons.extend(transform(quadrant, |p| DVec3::new(-p.x, -p.y, p.z), false));
    polygons
}
