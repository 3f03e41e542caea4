//! # Transform Operators
//!
//! The three mode-specific mesh transforms. Each operator is a pure function:
//! it clones its input, applies the documented affine adjustments, stamps the
//! result metadata, and returns a new mesh. Inputs are never mutated.
//!
//! Despite the Voronoi vocabulary, no spatial partitioning happens here; the
//! operators implement the documented numeric formulas and nothing more.

mod multicenter;
mod radial;
mod surface;

pub use multicenter::apply_multicenter;
pub use radial::apply_radial;
pub use surface::apply_surface;

use voronoi_mesh::{Mesh, Metadata};

use crate::error::PipelineError;
use crate::params::{Mode, TransformParams};

/// Builds the result metadata: the input mesh's metadata merged with the
/// `voronoi_*` provenance keys. The provenance keys always overwrite.
fn stamped_metadata(input: &Mesh, mode: Mode, params: &TransformParams) -> Metadata {
    let mut metadata = input.metadata().clone();

    let mut stamp = Metadata::new();
    stamp.insert("voronoi_mode", mode.as_str());
    stamp.insert("voronoi_shell_thickness", params.shell_thickness);
    stamp.insert("voronoi_density", params.density);
    stamp.insert("voronoi_relief_depth", params.relief_depth);

    metadata.merge(stamp);
    metadata
}

/// Final integrity gate for every operator.
///
/// A transform must never hand back empty geometry or faces referencing
/// out-of-range vertices. Neither can happen through the affine adjustments
/// alone, so a failure here means the working copy was broken.
fn ensure_intact(mesh: Mesh) -> Result<Mesh, PipelineError> {
    if mesh.is_empty() || !mesh.validate() {
        return Err(PipelineError::failure(
            "transform produced invalid mesh geometry",
        ));
    }
    Ok(mesh)
}
