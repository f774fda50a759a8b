//! Exact boundary-to-region construction for 2D centroidal Voronoi seeding.
//!
//! Pipeline
//! - `boundary`: `#`-marked text → outer and hole loops.
//! - `partition`: each loop → minimum convex pieces, checked for validity.
//! - `region`: pieces → exact region `union(outer) − union(holes)`.
//! - `pipeline`: sequences the above, seeds generators, drives an engine.
//!
//! API Policy
//! - Project-internal crate; the CLI is the only consumer. Breaking changes are
//!   fine when they improve clarity.

pub mod api;
pub mod boundary;
pub mod engine;
pub mod error;
pub mod exact;
pub mod partition;
pub mod pipeline;
pub mod region;
pub mod seed;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for callers.
pub mod prelude {
    pub use crate::boundary::{BoundaryLoops, Loop, LoopKind, ParseCfg};
    pub use crate::engine::{ExecuteReport, PassthroughEngine, RelaxCfg, TessellationEngine};
    pub use crate::error::{BoundaryError, EngineError, ErrorClass, PipelineError, SeedError};
    pub use crate::pipeline::{
        build_region_from_path, build_region_from_str, run_pipeline, Generators, PipelineCfg,
        RunReport,
    };
    pub use crate::region::Region;
    pub use crate::seed::SeedCfg;
    pub use nalgebra::Vector2 as Vec2;
}
