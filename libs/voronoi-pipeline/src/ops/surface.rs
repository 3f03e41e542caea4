//! # Surface Transform
//!
//! Uniform scale about the origin driven by density and shell thickness,
//! plus a fixed vertical lift when relief depth is set.

use config::constants::{SURFACE_DENSITY_SCALE, SURFACE_RELIEF_OFFSET, SURFACE_THICKNESS_SCALE};
use glam::DVec3;
use voronoi_mesh::Mesh;

use crate::error::PipelineError;
use crate::params::{Mode, TransformParams};

use super::{ensure_intact, stamped_metadata};

/// Applies the surface transform.
///
/// `scale = 1 + max(density, 0) * 0.05 + max(shell_thickness, 0) * 0.01`
/// about the origin; when `relief_depth > 0` every vertex is then shifted by
/// `(0, 0, relief_depth * 0.1)`. Seeds are ignored. Topology is preserved.
pub fn apply_surface(mesh: &Mesh, params: &TransformParams) -> Result<Mesh, PipelineError> {
    let mut result = mesh.clone();

    let scale = 1.0
        + params.density.max(0.0) * SURFACE_DENSITY_SCALE
        + params.shell_thickness.max(0.0) * SURFACE_THICKNESS_SCALE;
    result.scale_uniform(scale);

    if params.relief_depth > 0.0 {
        let offset = DVec3::new(0.0, 0.0, params.relief_depth * SURFACE_RELIEF_OFFSET);
        result.translate(offset);
    }

    result.set_metadata(stamped_metadata(mesh, Mode::Surface, params));
    ensure_intact(result)
}
