//! # Mesh Data Structure
//!
//! Deduplicating triangle mesh with reverse-winding face cancellation.
//!
//! Vertices are keyed by their quantized coordinates. Faces live in a set
//! keyed by winding: adding a face whose exact reverse is already present
//! removes both. Independently generated surfaces that share a patch with
//! opposite orientation therefore fuse into one seamless shell.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::io::{self, Write};

use config::constants::OUTPUT_HEADER;
use glam::DVec3;

use crate::primitives::Polygon;
use crate::quantize::{dequantize_point, quantize_point, QuantizedPoint};

/// A triangle as three vertex indices; the order defines the winding.
pub type Face = [u32; 3];

/// A triangle mesh built from a soup of polygons.
///
/// All vertex positions are stored quantized; the emitted coordinates are
/// exactly the quantized values.
///
/// A face is identified up to rotation: `(a, b, c)`, `(b, c, a)` and
/// `(c, a, b)` are the same face, so adding a rotation of a retained face
/// does nothing. Only the reversed winding `(c, b, a)` (or one of its
/// rotations) cancels it.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let (a, b, c) = (DVec3::ZERO, DVec3::X, DVec3::Y);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.face_count(), 1);
///
/// // The reverse winding cancels the face
/// mesh.add_triangle(c, b, a);
/// assert_eq!(mesh.face_count(), 0);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Quantized position -> vertex index
    index: HashMap<QuantizedPoint, u32>,
    /// Vertex positions in first-seen order
    vertices: Vec<QuantizedPoint>,
    /// Retained faces, stored in canonical rotation
    faces: BTreeSet<Face>,
}

/// Rotates a face so its smallest index comes first.
///
/// Rotation keeps the winding, so this is a canonical key for a face.
#[inline]
fn canonical([a, b, c]: Face) -> Face {
    if a <= b && a <= c {
        [a, b, c]
    } else if b <= a && b <= c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of retained faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if no face is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the quantized vertex positions in index order.
    #[inline]
    pub fn vertices(&self) -> &[QuantizedPoint] {
        &self.vertices
    }

    /// Returns the vertex at the given index as floats.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        dequantize_point(&self.vertices[index as usize])
    }

    /// Iterates retained faces in canonical order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.faces.iter().copied()
    }

    /// Returns true if the face (in any rotation) is retained.
    pub fn contains_face(&self, face: Face) -> bool {
        self.faces.contains(&canonical(face))
    }

    /// Returns the index of the vertex at `point`, registering it if new.
    ///
    /// Points that quantize to the same grid position share an index.
    pub fn get_vertex(&mut self, point: DVec3) -> u32 {
        let key = quantize_point(point);
        if let Some(&index) = self.index.get(&key) {
            return index;
        }
        let index = self.vertices.len() as u32;
        self.vertices.push(key);
        self.index.insert(key, index);
        index
    }

    /// Adds a triangle, or cancels its reverse if that is present.
    ///
    /// A triangle whose corners collapse onto fewer than three vertices
    /// has no area and is dropped.
    pub fn add_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        let va = self.get_vertex(a);
        let vb = self.get_vertex(b);
        let vc = self.get_vertex(c);
        if va == vb || vb == vc || va == vc {
            tracing::trace!(va, vb, vc, "dropping collapsed triangle");
            return;
        }
        let reverse = canonical([vc, vb, va]);
        if !self.faces.remove(&reverse) {
            self.faces.insert(canonical([va, vb, vc]));
        }
    }

    /// Adds a quad as the triangles `(a, b, c)` and `(a, c, d)`.
    pub fn add_quad(&mut self, a: DVec3, b: DVec3, c: DVec3, d: DVec3) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Adds a generator polygon.
    pub fn add_polygon(&mut self, polygon: &Polygon) {
        match *polygon {
            Polygon::Triangle([a, b, c]) => self.add_triangle(a, b, c),
            Polygon::Quad([a, b, c, d]) => self.add_quad(a, b, c, d),
        }
    }

    /// Adds every polygon of a sequence.
    pub fn add_polygons<'a>(&mut self, polygons: impl IntoIterator<Item = &'a Polygon>) {
        for polygon in polygons {
            self.add_polygon(polygon);
        }
    }

    /// Serializes the mesh into a byte sink.
    ///
    /// Writes the text produced by the [`fmt::Display`] impl and flushes.
    pub fn write<W: Write>(&self, mut sink: W) -> io::Result<()> {
        write!(sink, "{self}")?;
        sink.flush()
    }

    /// Serializes the mesh into a string.
    pub fn to_obj_string(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // ANALYSIS
    // =========================================================================

    /// Computes the axis-aligned bounding box of the referenced vertices.
    ///
    /// Returns (min, max) corners, or `None` for a mesh without faces.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut corners = self.faces.iter().flatten().map(|&i| self.vertex(i));
        let first = corners.next()?;
        Some(corners.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    /// Counts how many faces use each undirected edge.
    pub fn edge_report(&self) -> EdgeReport {
        let mut uses: HashMap<(u32, u32), usize> = HashMap::new();
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();

        for [a, b, c] in &self.faces {
            for (from, to) in [(*a, *b), (*b, *c), (*c, *a)] {
                *uses.entry((from.min(to), from.max(to))).or_default() += 1;
                *directed.entry((from, to)).or_default() += 1;
            }
        }

        EdgeReport {
            edges: uses.len(),
            boundary: uses.values().filter(|&&n| n == 1).count(),
            non_manifold: uses.values().filter(|&&n| n > 2).count(),
            misoriented: directed.values().filter(|&&n| n > 1).count(),
        }
    }

    /// Returns true if every edge is shared by exactly two faces with
    /// opposite directions.
    pub fn is_closed(&self) -> bool {
        self.edge_report().is_closed()
    }

    /// Computes the signed enclosed volume.
    ///
    /// Positive when faces are wound outward (right-hand rule).
    pub fn signed_volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|&[a, b, c]| {
                let (v0, v1, v2) = (self.vertex(a), self.vertex(b), self.vertex(c));
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Computes the total surface area.
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|&[a, b, c]| {
                let (v0, v1, v2) = (self.vertex(a), self.vertex(b), self.vertex(c));
                (v1 - v0).cross(v2 - v0).length() * 0.5
            })
            .sum()
    }
}

/// Format: the header comment, one `v x y z` line per vertex, a blank
/// line, then one `f i j k` line per face with 1-based indices.
impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{OUTPUT_HEADER}")?;
        for [x, y, z] in &self.vertices {
            writeln!(f, "v {x} {y} {z}")?;
        }
        writeln!(f)?;
        for [a, b, c] in &self.faces {
            writeln!(f, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }
        Ok(())
    }
}

/// Edge usage statistics of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeReport {
    /// Number of distinct undirected edges.
    pub edges: usize,
    /// Edges used by a single face.
    pub boundary: usize,
    /// Edges used by more than two faces.
    pub non_manifold: usize,
    /// Directed edges traversed by more than one face.
    pub misoriented: usize,
}

impl EdgeReport {
    /// Returns true for a closed, consistently oriented 2-manifold.
    pub fn is_closed(&self) -> bool {
        self.boundary == 0 && self.non_manifold == 0 && self.misoriented == 0
    }
}
