//! # Voronoi Pipeline
//!
//! Parameter-validated, mode-dispatched mesh transform pipeline.
//!
//! ## Architecture
//!
//! ```text
//! voronoi-io (Mesh) → validate → dispatch → operator → new Mesh
//! ```
//!
//! One pipeline invocation is a pure, synchronous, CPU-bound computation:
//! validate the parameters once, then dispatch the mode to one of three
//! transform operators. Operators never mutate their input, so independent
//! invocations can run concurrently without locking as long as each owns its
//! mesh.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use voronoi_mesh::Mesh;
//! use voronoi_pipeline::{dispatch, validate, Mode, TransformParams};
//!
//! let mut mesh = Mesh::new();
//! mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
//! mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
//! mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
//! mesh.add_face(0, 1, 2);
//!
//! let params = TransformParams::new(2.0, 0.5, 1.0);
//! validate(Mode::Surface, &params).unwrap();
//! let result = dispatch("surface", &mesh, &params).unwrap();
//! assert_eq!(result.face_count(), mesh.face_count());
//! ```

pub mod dispatch;
pub mod error;
pub mod ops;
pub mod params;

// Re-export public API
pub use dispatch::{dispatch, run};
pub use error::PipelineError;
pub use ops::{apply_multicenter, apply_radial, apply_surface};
pub use params::{validate, Mode, TransformParams};

// =============================================================================
// TESTS
// =============================================================================
