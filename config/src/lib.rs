//! # Config Crate
//!
//! Centralized configuration constants for the Voronoi Maker pipeline.
//! All transform coefficients and tunable tolerances are defined here so
//! downstream crates stay declarative and never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, SURFACE_DENSITY_SCALE};
//!
//! let density: f64 = 0.3;
//! let contribution = density * SURFACE_DENSITY_SCALE;
//! assert!(contribution < 1.0);
//! assert!(EPSILON_TOLERANCE > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every coefficient defined once, used everywhere
//! - **Mode-Prefixed Names**: each constant names the processing mode it drives
//! - **Well-Documented**: every constant has clear documentation

pub mod constants;
