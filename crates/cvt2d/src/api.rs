//! Curated internal surface for the CLI and benches (unstable).
//!
//! Prefer these re-exports over reaching into submodules.

// Boundary parsing
pub use crate::boundary::{load_loops, parse_loops, read_loops, BoundaryLoops, Loop, LoopKind, ParseCfg};
// Exact arithmetic
pub use crate::exact::{rat, to_f64, Rat, RatPoint};
// Convex decomposition
pub use crate::partition::{
    decompose_all, decompose_loop, is_convex_ccw, optimal_convex_partition, partition_is_valid,
    ConvexPiece, PartitionedLoops,
};
// Regions
pub use crate::region::{
    build_region, piece_halfplanes, piece_region, ConvexCell, ConvexRegion, HalfPlane,
    HalfplaneIntersection, Region,
};
// Engine and driver
pub use crate::engine::{ExecuteReport, PassthroughEngine, RelaxCfg, TessellationEngine};
pub use crate::pipeline::{
    build_region_from_loops, build_region_from_path, build_region_from_str, drive, run_pipeline,
    run_pipeline_str, BoundaryBuild, BuildStats, Generators, PipelineCfg, RunReport,
};
pub use crate::seed::{seed_generators, SeedCfg, SeedWindow};
