//! Pipeline driver: boundary text → loops → convex pieces → region → engine.
//!
//! Purpose
//! - Sequence parsing, decomposition and region building, stopping at the first
//!   error; no partial region leaves this module.
//! - Seed (or accept) the generators and drive a [`TessellationEngine`] through
//!   its whole contract: boundary, count, generators, stopping rule, execute.

use std::path::Path;

use nalgebra::Vector2;

use crate::boundary::{load_loops, parse_loops, BoundaryLoops, ParseCfg};
use crate::engine::{ExecuteReport, RelaxCfg, TessellationEngine};
use crate::error::{BoundaryError, EngineError, PipelineError};
use crate::partition::decompose_all;
use crate::region::{build_region, Region};
use crate::seed::{seed_generators, SeedCfg};

/// Run configuration; every field has the historical default.
#[derive(Clone, Debug, Default)]
pub struct PipelineCfg {
    pub parse: ParseCfg,
    pub relax: RelaxCfg,
    pub seed: SeedCfg,
    /// Decompose loops and convert pieces on rayon workers.
    pub parallel: bool,
}

/// Counts collected while building a region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BuildStats {
    pub outer_loops: usize,
    pub hole_loops: usize,
    pub outer_pieces: usize,
    pub hole_pieces: usize,
    pub cells: usize,
    pub area: f64,
}

/// Region plus how it was obtained.
#[derive(Clone, Debug)]
pub struct BoundaryBuild {
    pub region: Region,
    pub stats: BuildStats,
}

/// Initial generators: drawn by the seeder, or supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Generators {
    Count(usize),
    Points(Vec<Vector2<f64>>),
}

/// Summary of a full run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub stats: BuildStats,
    pub generators: usize,
    pub execute: ExecuteReport,
}

pub fn build_region_from_loops(loops: &BoundaryLoops, parallel: bool) -> Result<BoundaryBuild, BoundaryError> {
    let parts = decompose_all(loops, parallel)?;
    let region = build_region(&parts, parallel)?;
    if region.is_empty() {
        tracing::warn!("boundary encloses no area");
    }
    let stats = BuildStats {
        outer_loops: loops.outer.len(),
        hole_loops: loops.holes.len(),
        outer_pieces: parts.outer.len(),
        hole_pieces: parts.holes.len(),
        cells: region.cells().len(),
        area: region.area_f64(),
    };
    Ok(BoundaryBuild { region, stats })
}

pub fn build_region_from_str(text: &str, cfg: &PipelineCfg) -> Result<BoundaryBuild, BoundaryError> {
    let loops = parse_loops(text, &cfg.parse)?;
    build_region_from_loops(&loops, cfg.parallel)
}

pub fn build_region_from_path<P: AsRef<Path>>(path: P, cfg: &PipelineCfg) -> Result<BoundaryBuild, BoundaryError> {
    let loops = load_loops(path, &cfg.parse)?;
    build_region_from_loops(&loops, cfg.parallel)
}

/// Hand region and generators to the engine and execute it.
pub fn drive<E: TessellationEngine + ?Sized>(
    engine: &mut E,
    region: Region,
    generators: Vec<Vector2<f64>>,
    relax: RelaxCfg,
) -> Result<ExecuteReport, EngineError> {
    engine.assign_boundary(region);
    engine.assign_generator_num(generators.len());
    engine.assign_init_generators(generators)?;
    engine.apply_relax_cfg(relax);
    let report = engine.execute()?;
    tracing::info!(
        iterations = report.iterations,
        converged = report.converged,
        "engine_finished"
    );
    Ok(report)
}

fn run_built<E: TessellationEngine + ?Sized>(
    built: BoundaryBuild,
    generators: Generators,
    cfg: &PipelineCfg,
    engine: &mut E,
) -> Result<RunReport, PipelineError> {
    let BoundaryBuild { region, stats } = built;
    let points = match generators {
        Generators::Count(n) => seed_generators(&region, n, &cfg.seed)?,
        Generators::Points(p) => p,
    };
    let count = points.len();
    let execute = drive(engine, region, points, cfg.relax)?;
    Ok(RunReport {
        stats,
        generators: count,
        execute,
    })
}

/// Full run from a boundary file.
pub fn run_pipeline<P: AsRef<Path>, E: TessellationEngine + ?Sized>(
    path: P,
    generators: Generators,
    cfg: &PipelineCfg,
    engine: &mut E,
) -> Result<RunReport, PipelineError> {
    let built = build_region_from_path(path, cfg)?;
    run_built(built, generators, cfg, engine)
}

/// Full run from boundary text.
pub fn run_pipeline_str<E: TessellationEngine + ?Sized>(
    text: &str,
    generators: Generators,
    cfg: &PipelineCfg,
    engine: &mut E,
) -> Result<RunReport, PipelineError> {
    let built = build_region_from_str(text, cfg)?;
    run_built(built, generators, cfg, engine)
}
