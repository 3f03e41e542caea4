//! Centralized configuration values shared across the Voronoi Maker pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

/// Numerical tolerance used by geometry code for degeneracy checks.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Scale contribution of the density parameter in surface mode.
///
/// Surface mode scales the mesh by `1 + density * SURFACE_DENSITY_SCALE
/// + shell_thickness * SURFACE_THICKNESS_SCALE`.
///
/// # Examples
/// ```
/// use config::constants::SURFACE_DENSITY_SCALE;
/// assert!((0.3 * SURFACE_DENSITY_SCALE - 0.015).abs() < 1e-12);
/// ```
pub const SURFACE_DENSITY_SCALE: f64 = 0.05;

/// Scale contribution of the shell thickness parameter in surface mode.
///
/// # Examples
/// ```
/// use config::constants::SURFACE_THICKNESS_SCALE;
/// assert!((1.5 * SURFACE_THICKNESS_SCALE - 0.015).abs() < 1e-12);
/// ```
pub const SURFACE_THICKNESS_SCALE: f64 = 0.01;

/// Vertical offset per unit of relief depth in surface mode.
///
/// When `relief_depth > 0`, surface mode lifts every vertex by
/// `relief_depth * SURFACE_RELIEF_OFFSET` along +Z.
///
/// # Examples
/// ```
/// use config::constants::SURFACE_RELIEF_OFFSET;
/// assert!((0.2 * SURFACE_RELIEF_OFFSET - 0.02).abs() < 1e-12);
/// ```
pub const SURFACE_RELIEF_OFFSET: f64 = 0.1;

/// Rotation span in radians covered by the density parameter in radial mode.
///
/// A density of 1.0 rotates the mesh a quarter of a right angle short of
/// 90 degrees: `density * RADIAL_DENSITY_ANGLE_SPAN` radians about +Z.
///
/// # Examples
/// ```
/// use config::constants::RADIAL_DENSITY_ANGLE_SPAN;
/// assert!((RADIAL_DENSITY_ANGLE_SPAN - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
pub const RADIAL_DENSITY_ANGLE_SPAN: f64 = std::f64::consts::FRAC_PI_4;

/// Rotation contribution in radians per unit of relief depth in radial mode.
///
/// # Examples
/// ```
/// use config::constants::RADIAL_RELIEF_ANGLE;
/// assert_eq!(2.0 * RADIAL_RELIEF_ANGLE, 0.1);
/// ```
pub const RADIAL_RELIEF_ANGLE: f64 = 0.05;

/// Scale contribution of the shell thickness parameter in radial mode.
///
/// # Examples
/// ```
/// use config::constants::RADIAL_THICKNESS_SCALE;
/// assert!((2.0 * RADIAL_THICKNESS_SCALE - 0.02).abs() < 1e-12);
/// ```
pub const RADIAL_THICKNESS_SCALE: f64 = 0.01;

/// Weight of the relief depth parameter in the multicenter offset factor.
///
/// Multicenter mode translates the mesh towards the seed centroid by
/// `(seed_centroid - mesh_centroid) * (density + relief_depth *
/// MULTICENTER_RELIEF_WEIGHT)`.
///
/// # Examples
/// ```
/// use config::constants::MULTICENTER_RELIEF_WEIGHT;
/// assert!((0.5 * MULTICENTER_RELIEF_WEIGHT - 0.05).abs() < 1e-12);
/// ```
pub const MULTICENTER_RELIEF_WEIGHT: f64 = 0.1;

/// Per-seed scale contribution of the shell thickness parameter in
/// multicenter mode.
///
/// The scale factor grows linearly with the seed count:
/// `1 + shell_thickness * MULTICENTER_THICKNESS_SCALE * seed_count`.
///
/// # Examples
/// ```
/// use config::constants::MULTICENTER_THICKNESS_SCALE;
/// assert!((2.0 * MULTICENTER_THICKNESS_SCALE * 3.0 - 0.03).abs() < 1e-12);
/// ```
pub const MULTICENTER_THICKNESS_SCALE: f64 = 0.005;
