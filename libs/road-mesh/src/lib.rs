//! # Road Mesh
//!
//! Procedural, watertight meshes for road infrastructure: footpath slabs,
//! curbs, gutters and corner wedges around a rectangular block footprint.
//!
//! ## Architecture
//!
//! ```text
//! FootprintConfig → assembly (corners + strips) → MeshAccumulator (weld) → Mesh
//!                        ↑
//!                 quad / extrude (edge frames)
//! ```
//!
//! ## Modules
//!
//! - **geometry**: normals, bounds, rigid placement, point sets
//! - **extrude**: edge frames and the four extrusion parameterizations
//! - **quad**: four-point faces that chain extrusions edge by edge
//! - **accumulator**: normal-aware vertex welding
//! - **assembly**: corner pieces, footpath strips, placement tables
//!
//! All math is f64 with +Y up. Generated point loops wind clockwise seen
//! from their front side.
//!
//! ## Usage
//!
//! ```rust
//! use road_mesh::assembly::{CurbProfile, FootprintConfig};
//! use road_mesh::SurfaceTag;
//!
//! let curb = CurbProfile::new(0.35, 0.05, 0.5, 0.5);
//! let config = FootprintConfig::uniform(30.0, 30.0, curb, 3.0);
//! let mesh = road_mesh::build_footprint(&config).unwrap();
//!
//! assert!(mesh.validate());
//! assert_eq!(mesh.faces_with_tag(SurfaceTag::Road).count(), 4);
//! ```

pub mod accumulator;
pub mod assembly;
pub mod error;
pub mod extrude;
pub mod geometry;
pub mod mesh;
pub mod quad;

pub use accumulator::MeshAccumulator;
pub use assembly::{assemble, build_footprint, build_into, Assembly, FootprintConfig};
pub use error::{MeshError, MeshResult};
pub use extrude::{AngleReference, DirectionSpace, EdgeFrame, ExtrudeSpec};
pub use geometry::{FacePoints, RigidPlacement, TaggedFace};
pub use mesh::{Face, FaceHandle, FaceIndices, Mesh, QuadDiagonal, SurfaceTag, Winding};
pub use quad::Quad;
