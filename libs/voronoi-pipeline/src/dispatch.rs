//! # Pipeline Dispatch
//!
//! Resolves a mode string to the corresponding transform operator.

use voronoi_mesh::Mesh;

use crate::error::PipelineError;
use crate::ops::{apply_multicenter, apply_radial, apply_surface};
use crate::params::{Mode, TransformParams};

/// Executes the transform pipeline for `mesh` using `mode`.
///
/// The mode string is matched case-insensitively; an unrecognized value fails
/// with `PipelineFailure("unsupported mode: ...")`. No parameter validation
/// happens here — callers run [`crate::validate`] first. The only guard that
/// survives past dispatch is the multicenter empty-seeds check inside the
/// operator itself.
pub fn dispatch(mode: &str, mesh: &Mesh, params: &TransformParams) -> Result<Mesh, PipelineError> {
    run(Mode::parse(mode)?, mesh, params)
}

/// Routes an already-parsed mode to its operator.
pub fn run(mode: Mode, mesh: &Mesh, params: &TransformParams) -> Result<Mesh, PipelineError> {
    match mode {
        Mode::Surface => apply_surface(mesh, params),
        Mode::Radial => apply_radial(mesh, params),
        Mode::Multicenter => apply_multicenter(mesh, params),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(0, 1, 2);
        mesh
    }

    #[test]
    fn test_dispatch_routes_by_mode_tag() {
        let mesh = triangle();
        let params = TransformParams::new(2.0, 0.5, 1.0);

        let surface = dispatch("surface", &mesh, &params).unwrap();
        assert_eq!(
            surface.metadata().get("voronoi_mode").unwrap().as_text(),
            Some("surface")
        );

        let radial = dispatch("radial", &mesh, &params).unwrap();
        assert_eq!(
            radial.metadata().get("voronoi_mode").unwrap().as_text(),
            Some("radial")
        );

        let seeded = TransformParams::new(2.0, 0.5, 1.0).with_seeds(vec![DVec3::ONE]);
        let multicenter = dispatch("multicenter", &mesh, &seeded).unwrap();
        assert_eq!(
            multicenter.metadata().get("voronoi_mode").unwrap().as_text(),
            Some("multicenter")
        );
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let mesh = triangle();
        let params = TransformParams::new(2.0, 0.5, 1.0);
        assert!(dispatch("SURFACE", &mesh, &params).is_ok());
        assert!(dispatch("Radial", &mesh, &params).is_ok());
    }

    #[test]
    fn test_dispatch_unknown_mode_fails() {
        let mesh = triangle();
        let params = TransformParams::new(2.0, 0.5, 1.0);
        let err = dispatch("hexagonal", &mesh, &params).unwrap_err();
        assert_eq!(err, PipelineError::failure("unsupported mode: hexagonal"));
    }
}
