//! # Enclosure Mesh
//!
//! Generates a watertight triangle mesh of a rectangular button enclosure:
//! a case and/or a lid with 45° chamfered panel edges, a button hole in the
//! lid and a cable hole in the back wall.
//!
//! ## Architecture
//!
//! ```text
//! Settings → assembly → transform(primitives) → Mesh → text output
//! ```
//!
//! - **quantize**: Snaps coordinates to a 0.01 grid for vertex identity
//! - **mesh**: Vertex registry and face set with reverse-winding cancellation
//! - **primitives**: Chamfer ring, hole faces, hole walls, panels
//! - **transform**: Point maps with winding inversion for mirrored copies
//! - **assembly**: Places the six panels and feeds them into one mesh
//!
//! Panels are generated independently as closed slabs. Wherever two of them
//! touch, their shared surfaces arrive with opposite winding and cancel, so
//! no adjacency bookkeeping is needed to fuse them into one shell.
//!
//! ## Usage
//!
//! ```rust
//! use enclosure_mesh::{write_enclosure, Parts, Settings};
//!
//! let settings = Settings { parts: Parts::Lid, ..Settings::default() };
//! let mut out = Vec::new();
//! let mesh = write_enclosure(&settings, &mut out)?;
//! assert!(mesh.is_closed());
//! assert!(String::from_utf8_lossy(&out).starts_with("# Auto-generated\n"));
//! # Ok::<(), enclosure_mesh::MeshError>(())
//! ```

pub mod assembly;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod quantize;
pub mod settings;
pub mod transform;

pub use assembly::{build_enclosure, generate, write_enclosure};
pub use error::MeshError;
pub use mesh::{EdgeReport, Face, Mesh};
pub use settings::{Parts, Settings};
