use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cvt2d::api::{
    build_region_from_path, drive, seed_generators, PassthroughEngine, PipelineCfg, RelaxCfg,
    SeedCfg, TessellationEngine,
};
use cvt2d::error::BoundaryError;
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

const EXIT_USAGE: u8 = 1;
const EXIT_LOAD: u8 = 2;
const EXIT_RUN: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Build an exact region from a boundary file and seed a CVT engine")]
struct Cmd {
    /// Boundary file: `#Outer` / `#<other>` markers followed by `x y` lines
    boundary: PathBuf,
    /// Number of generators to seed
    generators: usize,
    /// Final generator positions, one `x y` line each
    #[arg(long, default_value = "finalState.txt")]
    out: PathBuf,
    #[arg(long, default_value_t = 1000)]
    max_iter: usize,
    #[arg(long, default_value_t = 1e-7)]
    min_move: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Decompose loops on all cores
    #[arg(long)]
    parallel: bool,
    /// Seed in the fixed box [0,200)² instead of inside the region
    #[arg(long)]
    fixed_box: bool,
    /// Debug-level logging
    #[arg(long)]
    verbose: bool,
}

impl Cmd {
    fn pipeline_cfg(&self) -> PipelineCfg {
        let seed = if self.fixed_box {
            SeedCfg::fixed_box(self.seed)
        } else {
            SeedCfg {
                seed: self.seed,
                ..SeedCfg::default()
            }
        };
        PipelineCfg {
            relax: RelaxCfg {
                max_iterations: self.max_iter,
                min_move: self.min_move,
            },
            seed,
            parallel: self.parallel,
            ..PipelineCfg::default()
        }
    }
}

fn main() -> ExitCode {
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match run(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Boundary failures exit with 2, everything after the region is built with 3.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<BoundaryError>() {
        Some(e) => {
            tracing::debug!(class = ?e.class(), "boundary_failure");
            EXIT_LOAD
        }
        None => EXIT_RUN,
    }
}

fn run(cmd: &Cmd) -> Result<()> {
    let cfg = cmd.pipeline_cfg();
    tracing::info!(boundary = %cmd.boundary.display(), generators = cmd.generators, "run");
    let built = build_region_from_path(&cmd.boundary, &cfg)
        .with_context(|| format!("loading boundary {}", cmd.boundary.display()))?;
    let stats = built.stats;
    let points = seed_generators(&built.region, cmd.generators, &cfg.seed).context("seeding generators")?;

    let mut engine = PassthroughEngine::new();
    let report = drive(&mut engine, built.region, points, cfg.relax).context("running tessellation engine")?;

    if let Some(parent) = cmd.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(&cmd.out).with_context(|| format!("creating {}", cmd.out.display()))?;
    let mut w = BufWriter::new(file);
    engine
        .print_generators(&mut w)
        .and_then(|_| w.flush())
        .with_context(|| format!("writing {}", cmd.out.display()))?;

    let payload = provenance::Payload::new(
        json!({
            "boundary": cmd.boundary.to_string_lossy(),
            "generators": cmd.generators,
            "max_iterations": cfg.relax.max_iterations,
            "min_move": cfg.relax.min_move,
            "seed": cmd.seed,
            "fixed_box": cmd.fixed_box,
            "parallel": cmd.parallel
        }),
        json!({
            "outer_loops": stats.outer_loops,
            "hole_loops": stats.hole_loops,
            "outer_pieces": stats.outer_pieces,
            "hole_pieces": stats.hole_pieces,
            "cells": stats.cells,
            "area": stats.area,
            "iterations": report.iterations,
            "converged": report.converged
        }),
    );
    let sidecar = provenance::write_sidecar(&cmd.out, &payload)?;
    tracing::info!(out = %cmd.out.display(), sidecar = %sidecar.display(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_map_onto_config() {
        let cmd = parse(&["b.txt", "12", "--max-iter", "5", "--seed", "9", "--fixed-box", "--parallel"]);
        let cfg = cmd.pipeline_cfg();
        assert_eq!(cfg.relax.max_iterations, 5);
        assert_eq!(cfg.relax.min_move, 1e-7);
        assert_eq!(cfg.seed, SeedCfg::fixed_box(9));
        assert!(cfg.parallel);
        assert_eq!(cmd.out, PathBuf::from("finalState.txt"));
    }

    #[test]
    fn usage_errors_are_detected() {
        assert!(Cmd::try_parse_from(["cli", "only-boundary"]).is_err());
        assert!(Cmd::try_parse_from(["cli", "b.txt", "many"]).is_err());
    }

    #[test]
    fn writes_generators_and_sidecar() {
        let dir = tempdir().unwrap();
        let boundary = dir.path().join("square.txt");
        fs::write(&boundary, "#Outer\n0 0\n10 0\n10 10\n0 10\n").unwrap();
        let out = dir.path().join("run").join("finalState.txt");
        let cmd = parse(&[
            boundary.to_str().unwrap(),
            "4",
            "--out",
            out.to_str().unwrap(),
        ]);
        run(&cmd).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            let xy: Vec<f64> = line.split_whitespace().map(|t| t.parse().unwrap()).collect();
            assert_eq!(xy.len(), 2);
            assert!((0.0..=10.0).contains(&xy[0]) && (0.0..=10.0).contains(&xy[1]));
        }
        let sidecar = dir.path().join("run").join("finalState.provenance.json");
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["summary"]["area"], 100.0);
        assert_eq!(doc["params"]["generators"], 4);
    }

    #[test]
    fn failures_map_to_exit_codes() {
        let dir = tempdir().unwrap();
        let missing = parse(&[dir.path().join("none.txt").to_str().unwrap(), "3"]);
        let err = run(&missing).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_LOAD);

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "#Outer\n0 0\n1 x\n").unwrap();
        let err = run(&parse(&[bad.to_str().unwrap(), "3"])).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_LOAD);

        // boundary without any loop builds an empty region; seeding then fails
        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        let out = dir.path().join("o.txt");
        let err = run(&parse(&[empty.to_str().unwrap(), "3", "--out", out.to_str().unwrap()])).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_RUN);
    }
}
