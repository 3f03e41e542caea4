//! # Voronoi Mesh
//!
//! Triangle mesh value type for the Voronoi Maker pipeline.
//!
//! ## Architecture
//!
//! ```text
//! voronoi-io (STL) → voronoi-mesh (Mesh) → voronoi-pipeline (transform)
//! ```
//!
//! A [`Mesh`] is an immutable-by-convention value: transform operators clone
//! their input and return a new mesh, so a loaded mesh is never mutated in
//! place by the pipeline.
//!
//! ## Example
//!
//! ```rust
//! use voronoi_mesh::Mesh;
//! use glam::DVec3;
//!
//! let mut mesh = Mesh::new();
//! mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
//! mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
//! mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
//! mesh.add_face(0, 1, 2);
//! assert!(mesh.validate());
//! ```

pub mod mesh;
pub mod metadata;

pub use mesh::Mesh;
pub use metadata::{MetaValue, Metadata};
