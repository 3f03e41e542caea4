//! # Modes and Parameters
//!
//! The closed mode enumeration, the immutable parameter group, and the
//! parameter validator.

use glam::DVec3;

use crate::error::PipelineError;

/// Processing mode selecting which transform operator runs.
///
/// The enumeration is closed: adding a mode extends the exhaustive match in
/// the dispatcher at compile time rather than an open string branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Surface,
    Radial,
    Multicenter,
}

impl Mode {
    /// Parses a mode string, case-insensitively.
    ///
    /// This is the single place unknown mode strings are rejected; callers
    /// must not special-case mode names themselves.
    pub fn parse(value: &str) -> Result<Self, PipelineError> {
        if value.eq_ignore_ascii_case("surface") {
            Ok(Mode::Surface)
        } else if value.eq_ignore_ascii_case("radial") {
            Ok(Mode::Radial)
        } else if value.eq_ignore_ascii_case("multicenter") {
            Ok(Mode::Multicenter)
        } else {
            Err(PipelineError::failure(format!("unsupported mode: {value}")))
        }
    }

    /// Returns the lowercase mode tag recorded in result metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Surface => "surface",
            Mode::Radial => "radial",
            Mode::Multicenter => "multicenter",
        }
    }
}

/// Immutable parameter group for one pipeline invocation.
///
/// `seeds` is meaningful only in multicenter mode; the validator rejects
/// seeds supplied to any other mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    /// Shell thickness, strictly positive.
    pub shell_thickness: f64,
    /// Relative cell density in `[0, 1]`.
    pub density: f64,
    /// Relief carving depth, non-negative; strictly positive in surface mode.
    pub relief_depth: f64,
    /// Seed centroids for multicenter mode.
    pub seeds: Vec<DVec3>,
}

impl TransformParams {
    /// Creates a seedless parameter group.
    pub fn new(shell_thickness: f64, density: f64, relief_depth: f64) -> Self {
        Self {
            shell_thickness,
            density,
            relief_depth,
            seeds: Vec::new(),
        }
    }

    /// Attaches seed points for multicenter mode.
    pub fn with_seeds(mut self, seeds: Vec<DVec3>) -> Self {
        self.seeds = seeds;
        self
    }
}

/// Checks parameter values against the mode-specific legality rules.
///
/// Rules are checked in a fixed order and the first violation wins. Purely a
/// predicate: no geometry is touched and calling it twice with identical
/// arguments yields identical results.
///
/// ## Rules
///
/// 1. `shell_thickness > 0`
/// 2. `density` in `[0, 1]`
/// 3. `relief_depth >= 0`
/// 4. seeds only in multicenter mode
/// 5. multicenter mode requires at least one seed
/// 6. surface mode requires `relief_depth > 0`
pub fn validate(mode: Mode, params: &TransformParams) -> Result<(), PipelineError> {
    if params.shell_thickness <= 0.0 {
        return Err(PipelineError::invalid_parameter(
            "shell_thickness",
            "must be greater than zero",
        ));
    }

    if params.density < 0.0 {
        return Err(PipelineError::invalid_parameter(
            "density",
            "must be zero or greater",
        ));
    }
    if params.density > 1.0 {
        return Err(PipelineError::invalid_parameter(
            "density",
            "must be at most 1",
        ));
    }

    if params.relief_depth < 0.0 {
        return Err(PipelineError::invalid_parameter(
            "relief_depth",
            "must be zero or greater",
        ));
    }

    if mode != Mode::Multicenter && !params.seeds.is_empty() {
        return Err(PipelineError::invalid_parameter(
            "seeds",
            "seeds only valid in multicenter mode",
        ));
    }

    if mode == Mode::Multicenter && params.seeds.is_empty() {
        return Err(PipelineError::invalid_parameter(
            "seeds",
            "at least one seed required",
        ));
    }

    if mode == Mode::Surface && params.relief_depth == 0.0 {
        return Err(PipelineError::invalid_parameter(
            "relief_depth",
            "must be greater than zero in surface mode",
        ));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
