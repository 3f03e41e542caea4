//! # Voronoi IO
//!
//! STL input and output for the Voronoi Maker pipeline.
//!
//! ## Architecture
//!
//! ```text
//! disk (STL) → voronoi-io → voronoi-mesh (Mesh) → voronoi-pipeline
//! ```
//!
//! The loader guarantees the pipeline a non-empty, well-formed triangulated
//! surface: a missing file, a non-STL extension, malformed content, and a
//! geometry-free file are all reported as distinguishable error variants and
//! never retried.

pub mod error;
pub mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, parse_stl, save_stl};
