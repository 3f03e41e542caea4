//! # Voronoi CLI
//!
//! Command-line driver for the Voronoi Maker pipeline.
//!
//! Collects the numeric parameters and optional seed points, validates them
//! once, then runs one pipeline invocation per input mesh. Invocations are
//! independent (each owns its mesh), so batch inputs run in parallel.
//!
//! The mode string is passed through to the pipeline un-interpreted; the
//! dispatcher is the single place unknown modes are rejected.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glam::DVec3;
use rayon::prelude::*;

use voronoi_io::{load_stl, save_stl};
use voronoi_mesh::Mesh;
use voronoi_pipeline::{dispatch, validate, Mode, TransformParams};

/// Seed points parsed from the `--seeds` JSON argument.
#[derive(Debug, Clone)]
pub struct SeedArg(pub Vec<[f64; 3]>);

/// Generate Voronoi patterns for 3D models.
#[derive(Parser)]
#[command(name = "voronoimaker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source mesh files (STL)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Destination for the generated mesh (single input only; defaults to
    /// `<stem>_voronoi.<ext>` next to each input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Processing mode (surface, radial, multicenter)
    #[arg(short, long, default_value = "surface")]
    pub mode: String,

    /// Thickness of the generated shell
    #[arg(long, default_value_t = 2.0)]
    pub shell_thickness: f64,

    /// Relative density of Voronoi cells (0 to 1)
    #[arg(long, default_value_t = 0.5)]
    pub density: f64,

    /// Depth of relief carving (default: 1.0 in surface mode, 0 otherwise)
    #[arg(long)]
    pub relief_depth: Option<f64>,

    /// Seed points as a JSON array of [x, y, z] triples (multicenter mode)
    #[arg(long, value_parser = parse_seed_arg)]
    pub seeds: Option<SeedArg>,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    pub ascii: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses the `--seeds` value. Shape errors (non-JSON, inner arrays that are
/// not exactly 3 numbers) are rejected here at the driver layer.
fn parse_seed_arg(value: &str) -> Result<SeedArg, String> {
    serde_json::from_str::<Vec<[f64; 3]>>(value)
        .map(SeedArg)
        .map_err(|e| format!("seeds must be a valid JSON array of [x, y, z] triples: {e}"))
}

/// Default output path: `<stem>_voronoi.<ext>` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stl".to_string());
    input.with_file_name(format!("{stem}_voronoi.{extension}"))
}

/// Relief depth default depends on the mode: surface mode carves by default,
/// the other modes do not.
fn effective_relief_depth(mode: Mode, relief_depth: Option<f64>) -> f64 {
    relief_depth.unwrap_or(match mode {
        Mode::Surface => 1.0,
        Mode::Radial | Mode::Multicenter => 0.0,
    })
}

/// Execute the CLI command.
pub fn execute(cli: Cli) -> Result<()> {
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.inputs.len() > 1 && cli.output.is_some() {
        bail!("--output is only valid with a single input file");
    }

    // Parsing the mode up front reuses the dispatcher's normalization; an
    // unknown mode surfaces the pipeline's own error.
    let mode = Mode::parse(&cli.mode)?;

    let seeds: Vec<DVec3> = cli
        .seeds
        .as_ref()
        .map(|arg| arg.0.iter().map(|s| DVec3::from_array(*s)).collect())
        .unwrap_or_default();

    let params = TransformParams::new(
        cli.shell_thickness,
        cli.density,
        effective_relief_depth(mode, cli.relief_depth),
    )
    .with_seeds(seeds);

    // Validate once; the parameters are shared by every invocation.
    validate(mode, &params)?;

    log::debug!(
        "mode={} shell_thickness={} density={} relief_depth={} seeds={}",
        mode.as_str(),
        params.shell_thickness,
        params.density,
        params.relief_depth,
        params.seeds.len()
    );

    // Invocations share no mutable state; each owns its mesh copy.
    cli.inputs
        .par_iter()
        .map(|input| {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(input));
            process_one(input, &output, &cli.mode, &params, cli.ascii)
        })
        .collect::<Result<Vec<()>>>()?;

    Ok(())
}

/// One pipeline invocation: load, dispatch, save.
fn process_one(
    input: &Path,
    output: &Path,
    mode: &str,
    params: &TransformParams,
    ascii: bool,
) -> Result<()> {
    let mesh: Mesh =
        load_stl(input).with_context(|| format!("failed to load {}", input.display()))?;
    log::debug!(
        "loaded {}: {} vertices, {} faces",
        input.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );

    let result = dispatch(mode, &mesh, params)?;

    save_stl(&result, output, !ascii)
        .with_context(|| format!("failed to save {}", output.display()))?;
    log::info!("Voronoi mesh saved to {}", output.display());

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
