//! Tessellation engine interface.
//!
//! Purpose
//! - The relaxation (Lloyd-style CVT iteration) lives outside this crate. The
//!   pipeline talks to it through [`TessellationEngine`]: install a region, a
//!   declared generator count and initial generators, set the stopping rule,
//!   execute, print.
//! - [`PassthroughEngine`] implements the contract without moving generators.
//!   It validates the installed state, so the pipeline and the CLI run end to end.
//!
//! Contract
//! - The region is handed over once and never mutated by the engine.
//! - `assign_init_generators` must match the declared count exactly.
//! - `print_generators` writes one `x y` line per generator.

use std::io::{self, Write};

use nalgebra::Vector2;

use crate::error::EngineError;
use crate::region::Region;

/// Stopping rule for relaxation. Defaults match the historical driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelaxCfg {
    pub max_iterations: usize,
    /// Stop once no generator moves farther than this in one iteration.
    pub min_move: f64,
}

impl Default for RelaxCfg {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            min_move: 1e-7,
        }
    }
}

/// Outcome of [`TessellationEngine::execute`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExecuteReport {
    pub iterations: usize,
    pub converged: bool,
    /// Largest generator displacement in the last iteration.
    pub max_move: f64,
}

/// External relaxation engine as seen from the pipeline.
pub trait TessellationEngine {
    fn assign_boundary(&mut self, region: Region);
    fn assign_generator_num(&mut self, count: usize);
    fn assign_init_generators(&mut self, points: Vec<Vector2<f64>>) -> Result<(), EngineError>;
    fn set_max_iteration(&mut self, n: usize);
    fn set_min_move(&mut self, eps: f64);
    fn execute(&mut self) -> Result<ExecuteReport, EngineError>;
    fn print_generators(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Apply both stopping parameters.
    fn apply_relax_cfg(&mut self, cfg: RelaxCfg) {
        self.set_max_iteration(cfg.max_iterations);
        self.set_min_move(cfg.min_move);
    }
}

/// Engine that keeps generators where they were seeded.
#[derive(Clone, Debug, Default)]
pub struct PassthroughEngine {
    region: Option<Region>,
    declared: usize,
    generators: Vec<Vector2<f64>>,
    cfg: RelaxCfg,
}

impl PassthroughEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn generators(&self) -> &[Vector2<f64>] {
        &self.generators
    }

    pub fn relax_cfg(&self) -> RelaxCfg {
        self.cfg
    }
}

impl TessellationEngine for PassthroughEngine {
    fn assign_boundary(&mut self, region: Region) {
        self.region = Some(region);
    }

    fn assign_generator_num(&mut self, count: usize) {
        self.declared = count;
    }

    fn assign_init_generators(&mut self, points: Vec<Vector2<f64>>) -> Result<(), EngineError> {
        if points.len() != self.declared {
            return Err(EngineError::GeneratorCountMismatch {
                declared: self.declared,
                supplied: points.len(),
            });
        }
        self.generators = points;
        Ok(())
    }

    fn set_max_iteration(&mut self, n: usize) {
        self.cfg.max_iterations = n;
    }

    fn set_min_move(&mut self, eps: f64) {
        self.cfg.min_move = eps;
    }

    fn execute(&mut self) -> Result<ExecuteReport, EngineError> {
        let region = self.region.as_ref().ok_or(EngineError::MissingBoundary)?;
        if self.generators.is_empty() {
            return Err(EngineError::MissingGenerators);
        }
        let outside = self
            .generators
            .iter()
            .filter(|&&g| !region.contains_f64(g))
            .count();
        if outside > 0 {
            tracing::warn!(outside, total = self.generators.len(), "generators_outside_region");
        }
        tracing::info!(
            generators = self.generators.len(),
            max_iterations = self.cfg.max_iterations,
            min_move = self.cfg.min_move,
            "passthrough_execute"
        );
        Ok(ExecuteReport {
            iterations: 0,
            converged: true,
            max_move: 0.0,
        })
    }

    fn print_generators(&self, out: &mut dyn Write) -> io::Result<()> {
        for g in &self.generators {
            writeln!(out, "{} {}", g.x, g.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::ConvexPiece;
    use crate::region::piece_region;
    use nalgebra::vector;

    fn unit_square() -> Region {
        piece_region(&ConvexPiece::new(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]))
        .unwrap()
    }

    #[test]
    fn count_must_match_declared() {
        let mut e = PassthroughEngine::new();
        e.assign_generator_num(2);
        let err = e.assign_init_generators(vec![vector![0.5, 0.5]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::GeneratorCountMismatch {
                declared: 2,
                supplied: 1
            }
        );
        assert!(e.generators().is_empty());
    }

    #[test]
    fn execute_requires_boundary_and_generators() {
        let mut e = PassthroughEngine::new();
        assert_eq!(e.execute(), Err(EngineError::MissingBoundary));
        e.assign_boundary(unit_square());
        assert_eq!(e.execute(), Err(EngineError::MissingGenerators));
        e.assign_generator_num(1);
        e.assign_init_generators(vec![vector![0.25, 0.75]]).unwrap();
        let report = e.execute().unwrap();
        assert_eq!(report.iterations, 0);
        assert!(report.converged);
    }

    #[test]
    fn relax_cfg_and_printing() {
        let mut e = PassthroughEngine::new();
        e.apply_relax_cfg(RelaxCfg {
            max_iterations: 7,
            min_move: 0.5,
        });
        assert_eq!(e.relax_cfg().max_iterations, 7);
        assert_eq!(e.relax_cfg().min_move, 0.5);
        e.assign_generator_num(2);
        e.assign_init_generators(vec![vector![1.5, 2.0], vector![-3.0, 0.125]])
            .unwrap();
        let mut buf = Vec::new();
        e.print_generators(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1.5 2\n-3 0.125\n");
    }
}
