//! # Arc Outline
//!
//! Evenly spaced points on a circular arc, the building block of the hole
//! faces and hole walls.

use std::f64::consts::FRAC_PI_2;

use config::constants::arc_segments;
use glam::DVec2;

/// Generates arc points `(-sin θ·r, -cos θ·r)`.
///
/// With `full == false` θ sweeps a quarter turn from the `-y` axis to the
/// `-x` axis; with `full == true` it sweeps a whole turn. The sweep runs
/// clockwise seen from +Z. Both ends are included, so a full circle repeats
/// its first point at the end.
///
/// The full circle is the quarter arc mirrored into the other three
/// quadrants, negating coordinates exactly the way hole faces are tiled.
/// Every point of the ring is therefore bit-identical to the matching
/// point on a hole face and quantizes to the same vertex.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::primitives::arc_points;
///
/// let quarter = arc_points(2.0, false);
/// assert_eq!(quarter.len(), 31);
/// assert_eq!(quarter[0].y, -2.0);
/// ```
pub fn arc_points(radius: f64, full: bool) -> Vec<DVec2> {
    let quarter = quarter_arc(radius);
    if !full {
        return quarter;
    }

    let mut ring = Vec::with_capacity(arc_segments(true) + 1);
    ring.extend_from_slice(&quarter);
    // (-x, +y), (+x, +y), (+x, -y); the shared quadrant ends are skipped
    ring.extend(quarter.iter().rev().skip(1).map(|p| DVec2::new(p.x, -p.y)));
    ring.extend(quarter.iter().skip(1).map(|p| -*p));
    ring.extend(quarter.iter().rev().skip(1).map(|p| DVec2::new(-p.x, p.y)));
    ring
}

fn quarter_arc(radius: f64) -> Vec<DVec2> {
    let segments = arc_segments(false);

    (0..=segments)
        .map(|i| {
            let angle = (i as f64 / segments as f64) * FRAC_PI_2;
            DVec2::new(-angle.sin() * radius, -angle.cos() * radius)
        })
        .collect()
}
