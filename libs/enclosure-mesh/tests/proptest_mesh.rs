//! Property-based tests for quantization and face cancellation.
//!
//! Run with: cargo test -p enclosure-mesh -- proptest

use enclosure_mesh::quantize::{quantize, quantize_point};
use enclosure_mesh::Mesh;
use glam::DVec3;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A coordinate in the range an enclosure actually uses.
fn arb_coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

/// A point snapped to the 0.01 grid.
fn arb_grid_point() -> impl Strategy<Value = DVec3> {
    prop::array::uniform3(-50_000i64..50_000).prop_map(|[x, y, z]| {
        DVec3::new(x as f64 / 100.0, y as f64 / 100.0, z as f64 / 100.0)
    })
}

/// Three grid points that are pairwise distinct after quantization.
fn arb_triangle() -> impl Strategy<Value = [DVec3; 3]> {
    prop::array::uniform3(arb_grid_point()).prop_filter("distinct corners", |[a, b, c]| {
        let (qa, qb, qc) = (quantize_point(*a), quantize_point(*b), quantize_point(*c));
        qa != qb && qb != qc && qa != qc
    })
}

// =============================================================================
// Quantization
// =============================================================================

proptest! {
    #[test]
    fn proptest_quantize_is_idempotent(value in arb_coord()) {
        let once = quantize(value);
        prop_assert_eq!(quantize(once.to_f64()), once);
    }

    #[test]
    fn proptest_quantize_error_is_half_step(value in arb_coord()) {
        let snapped = quantize(value).to_f64();
        prop_assert!((snapped - value).abs() <= 0.005 + 1e-12);
    }

    #[test]
    fn proptest_quantize_is_odd(value in arb_coord()) {
        prop_assert_eq!(quantize(-value).steps(), -quantize(value).steps());
    }

    #[test]
    fn proptest_display_parses_back(value in arb_coord()) {
        let q = quantize(value);
        let text = q.to_string();
        let (_, decimals) = text.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
        prop_assert!(text != "-0.00");
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(quantize(parsed), q);
    }

    #[test]
    fn proptest_nearby_points_share_vertex(
        point in arb_grid_point(),
        jitter in prop::array::uniform3(-0.004..0.004f64),
    ) {
        let mut mesh = Mesh::new();
        let a = mesh.get_vertex(point);
        let b = mesh.get_vertex(point + DVec3::from_array(jitter));
        prop_assert_eq!(a, b);
        prop_assert_eq!(mesh.vertex_count(), 1);
    }
}

// =============================================================================
// Face cancellation
// =============================================================================

proptest! {
    #[test]
    fn proptest_reverse_cancels_in_either_order([a, b, c] in arb_triangle()) {
        let mut forward_first = Mesh::new();
        forward_first.add_triangle(a, b, c);
        forward_first.add_triangle(c, b, a);
        prop_assert_eq!(forward_first.face_count(), 0);

        let mut reverse_first = Mesh::new();
        reverse_first.add_triangle(c, b, a);
        reverse_first.add_triangle(a, b, c);
        prop_assert_eq!(reverse_first.face_count(), 0);
    }

    #[test]
    fn proptest_rotated_reverse_cancels([a, b, c] in arb_triangle()) {
        let mut mesh = Mesh::new();
        mesh.add_triangle(a, b, c);
        // (b, a, c) is (c, b, a) rotated
        mesh.add_triangle(b, a, c);
        prop_assert!(mesh.is_empty());
    }

    #[test]
    fn proptest_same_winding_is_kept_once([a, b, c] in arb_triangle()) {
        let mut mesh = Mesh::new();
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(b, c, a);
        prop_assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn proptest_quad_is_two_triangles(
        [a, b, c] in arb_triangle(),
        d in arb_grid_point(),
    ) {
        let qd = quantize_point(d);
        prop_assume!(qd != quantize_point(a) && qd != quantize_point(c));

        let mut quad = Mesh::new();
        quad.add_quad(a, b, c, d);

        let mut triangles = Mesh::new();
        triangles.add_triangle(a, b, c);
        triangles.add_triangle(a, c, d);

        prop_assert_eq!(quad.to_obj_string(), triangles.to_obj_string());
    }

    #[test]
    fn proptest_closed_tetrahedron(
        [a, b, c] in arb_triangle(),
        height in 1i64..10_000,
    ) {
        // Apex off the base plane keeps every face non-degenerate
        let normal = (b - a).cross(c - a);
        prop_assume!(normal.length() > 1e-6);
        let apex = quantize_point((a + b + c) / 3.0 + normal.normalize() * (height as f64 / 100.0));
        let apex = DVec3::new(apex[0].to_f64(), apex[1].to_f64(), apex[2].to_f64());

        let mut mesh = Mesh::new();
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(a, b, apex);
        mesh.add_triangle(b, c, apex);
        mesh.add_triangle(c, a, apex);
        prop_assume!(mesh.face_count() == 4);
        prop_assert!(mesh.is_closed());
    }
}
