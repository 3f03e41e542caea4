//! # Radial Transform
//!
//! Rotation about the vertical axis through the mesh centroid, followed by a
//! thickness-driven uniform scale.

use config::constants::{RADIAL_DENSITY_ANGLE_SPAN, RADIAL_RELIEF_ANGLE, RADIAL_THICKNESS_SCALE};
use glam::DMat4;
use voronoi_mesh::Mesh;

use crate::error::PipelineError;
use crate::params::{Mode, TransformParams};

use super::{ensure_intact, stamped_metadata};

/// Applies the radial transform.
///
/// `angle = max(density, 0) * (pi/4) + relief_depth * 0.05` radians about +Z,
/// pivoted at the mesh centroid rather than the origin; then a uniform scale
/// of `1 + max(shell_thickness, 0) * 0.01` about the origin. Seeds are
/// ignored. Topology is preserved.
pub fn apply_radial(mesh: &Mesh, params: &TransformParams) -> Result<Mesh, PipelineError> {
    let mut result = mesh.clone();

    let angle = params.density.max(0.0) * RADIAL_DENSITY_ANGLE_SPAN
        + params.relief_depth * RADIAL_RELIEF_ANGLE;

    // Rotate about the vertical axis through the centroid: move the pivot to
    // the origin, rotate, move it back.
    let pivot = result.centroid();
    let rotation = DMat4::from_translation(pivot)
        * DMat4::from_rotation_z(angle)
        * DMat4::from_translation(-pivot);
    result.transform(&rotation);

    let scale = 1.0 + params.shell_thickness.max(0.0) * RADIAL_THICKNESS_SCALE;
    result.scale_uniform(scale);

    result.set_metadata(stamped_metadata(mesh, Mode::Radial, params));
    ensure_intact(result)
}
