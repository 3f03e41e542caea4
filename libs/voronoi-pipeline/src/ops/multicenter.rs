//! # Multicenter Transform
//!
//! Translation towards the centroid of the supplied seed points, followed by
//! a scale that grows linearly with the seed count.

use config::constants::{MULTICENTER_RELIEF_WEIGHT, MULTICENTER_THICKNESS_SCALE};
use glam::DVec3;
use voronoi_mesh::Mesh;

use crate::error::PipelineError;
use crate::params::{Mode, TransformParams};

use super::{ensure_intact, stamped_metadata};

/// Applies the multicenter transform.
///
/// `offset = (seed_centroid - mesh_centroid) * (max(density, 0) +
/// relief_depth * 0.1)` translates every vertex; then a uniform scale of
/// `1 + max(shell_thickness, 0) * 0.005 * seed_count` about the origin.
///
/// The validator already requires seeds for this mode, but the operator
/// re-checks so it stays safe to call directly: empty seeds fail with
/// [`PipelineError::PipelineFailure`].
pub fn apply_multicenter(mesh: &Mesh, params: &TransformParams) -> Result<Mesh, PipelineError> {
    if params.seeds.is_empty() {
        return Err(PipelineError::failure(
            "multicenter mode requires at least one seed point",
        ));
    }

    let mut result = mesh.clone();

    let seed_sum: DVec3 = params.seeds.iter().copied().sum();
    let seed_centroid = seed_sum / params.seeds.len() as f64;

    let weight = params.density.max(0.0) + params.relief_depth * MULTICENTER_RELIEF_WEIGHT;
    let offset = (seed_centroid - result.centroid()) * weight;
    result.translate(offset);

    let scale = 1.0
        + params.shell_thickness.max(0.0)
            * MULTICENTER_THICKNESS_SCALE
            * params.seeds.len() as f64;
    result.scale_uniform(scale);

    let mut metadata = stamped_metadata(mesh, Mode::Multicenter, params);
    metadata.insert("voronoi_seed_count", params.seeds.len() as u64);
    result.set_metadata(metadata);

    ensure_intact(result)
}
