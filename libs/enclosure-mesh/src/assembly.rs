//! # Enclosure Assembly
//!
//! Places the panels of the lid and the case into one mesh.
//!
//! ## Layout
//!
//! ```text
//!          z = depth   +---------- lid (button hole) ----------+
//!                      |                                       |
//!   left wall (-x)     |   front (-y) / back (+y, cable hole)  |  right wall (+x)
//!                      |                                       |
//!          z = 0       +--------------- bottom ----------------+
//! ```
//!
//! Every panel is a closed slab with a 45° rim. Neighbouring rims coincide
//! with opposite winding and cancel in the mesh, so the result is a single
//! shell with mitred edges.

use std::io::Write;

use tracing::{debug, info, instrument};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{panel, Polygon};
use crate::settings::Settings;
use crate::transform::{transform_affine, Placement};

/// Builds the enclosure mesh for already validated settings.
///
/// Panels are fed into one mesh in a fixed order, so the same settings always
/// yield the same vertex and face indices.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::{build_enclosure, Settings};
///
/// let mesh = build_enclosure(&Settings::default());
/// assert!(mesh.is_closed());
/// ```
#[instrument(skip(settings), fields(parts = ?settings.parts, surface = settings.with_surface))]
pub fn build_enclosure(settings: &Settings) -> Mesh {
    let Settings {
        width: w,
        length: l,
        thickness: t,
        depth: d,
        ..
    } = *settings;

    let mut mesh = Mesh::new();

    if settings.parts.includes_lid() {
        let hole = Some(settings.button_radius());
        add_panel(&mut mesh, "lid", &panel(w, l, t, hole, d));

        if settings.with_surface {
            let surface = panel(w, l, t, hole, 0.0);
            add_panel(&mut mesh, "surface", &transform_affine(&surface, &Placement::surface(d)));
        }
    }

    if settings.parts.includes_case() {
        let bottom = panel(w, l, t, None, 0.0);
        add_panel(&mut mesh, "bottom", &transform_affine(&bottom, &Placement::bottom()));

        let front = panel(w, d, t, None, 0.0);
        add_panel(&mut mesh, "front", &transform_affine(&front, &Placement::front(l, d)));

        let back = panel(w, d, t, Some(settings.cable_radius()), 0.0);
        add_panel(&mut mesh, "back", &transform_affine(&back, &Placement::back(l, d)));

        let side = panel(l, d, t, None, 0.0);
        add_panel(&mut mesh, "right", &transform_affine(&side, &Placement::right(w, d)));
        add_panel(&mut mesh, "left", &transform_affine(&side, &Placement::left(w, d)));
    }

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "assembled enclosure"
    );
    mesh
}

/// Validates the settings and builds the enclosure.
pub fn generate(settings: &Settings) -> Result<Mesh, MeshError> {
    settings.validate()?;
    Ok(build_enclosure(settings))
}

/// Validates, builds and serializes the enclosure in one pass.
///
/// Returns the mesh so callers can report on what was written.
pub fn write_enclosure<W: Write>(settings: &Settings, sink: W) -> Result<Mesh, MeshError> {
    let mesh = generate(settings)?;
    mesh.write(sink)?;
    Ok(mesh)
}

fn add_panel(mesh: &mut Mesh, name: &str, polygons: &[Polygon]) {
    let before = mesh.face_count();
    mesh.add_polygons(polygons);
    debug!(
        panel = name,
        polygons = polygons.len(),
        faces_before = before,
        faces_after = mesh.face_count(),
        "added panel"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Parts;
    use approx::assert_relative_eq;

    #[test]
    fn test_lid_only_is_closed() {
        let settings = Settings { parts: Parts::Lid, ..Settings::default() };
        let mesh = build_enclosure(&settings);
        assert!(mesh.is_closed(), "{:?}", mesh.edge_report());
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min.z, 55.0);
        assert_eq!(max.z, 60.0);
    }

    #[test]
    fn test_case_only_is_closed() {
        let settings = Settings { parts: Parts::Case, ..Settings::default() };
        let mesh = build_enclosure(&settings);
        assert!(mesh.is_closed(), "{:?}", mesh.edge_report());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_assembly_bounds() {
        let settings = Settings {
            width: 80.0,
            length: 120.0,
            depth: 40.0,
            ..Settings::default()
        };
        let mesh = build_enclosure(&settings);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min.to_array(), [-40.0, -60.0, 0.0]);
        assert_eq!(max.to_array(), [40.0, 60.0, 40.0]);
    }

    #[test]
    fn test_rims_cancel_between_panels() {
        let settings = Settings::default();
        let lid = build_enclosure(&Settings { parts: Parts::Lid, ..settings });
        let case = build_enclosure(&Settings { parts: Parts::Case, ..settings });
        let both = build_enclosure(&settings);
        // Each of the lid's four rim strips cancels against a wall's top strip
        assert_eq!(both.face_count(), lid.face_count() + case.face_count() - 2 * 4 * 4);
    }

    #[test]
    fn test_assembly_volume_is_shell_volume() {
        // Without holes the shell is the outer box minus the inner box
        let settings = Settings {
            button: 2.0,
            cable: 2.0,
            clearance: 0.0,
            ..Settings::default()
        };
        let mesh = build_enclosure(&settings);
        let outer = 100.0 * 100.0 * 60.0;
        let inner = 90.0 * 90.0 * 50.0;
        let hole_wall = |r: f64| 0.5 * 120.0 * r * r * (std::f64::consts::TAU / 120.0).sin() * 5.0;
        let expected = outer - inner - 2.0 * hole_wall(1.0);
        assert_relative_eq!(mesh.signed_volume(), expected, epsilon = 0.5);
    }

    #[test]
    fn test_surface_adds_raised_lip() {
        let settings = Settings {
            parts: Parts::Lid,
            with_surface: true,
            ..Settings::default()
        };
        let mesh = build_enclosure(&settings);
        assert!(mesh.is_closed(), "{:?}", mesh.edge_report());
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min.z, 55.0);
        assert_eq!(max.z, 65.0);
    }

    #[test]
    fn test_generate_rejects_invalid_settings() {
        let settings = Settings { thickness: -1.0, ..Settings::default() };
        assert!(generate(&settings).is_err());
    }

    #[test]
    fn test_write_enclosure_reports_mesh() {
        let mut buffer = Vec::new();
        let mesh = write_enclosure(&Settings::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let face_lines = text.lines().filter(|line| line.starts_with("f ")).count();
        assert_eq!(face_lines, mesh.face_count());
    }
}
