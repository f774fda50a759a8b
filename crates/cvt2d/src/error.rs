//! Error types for the boundary pipeline.
//!
//! Policy
//! - Every failure is terminal for the current run and surfaces as a value.
//! - No partial region is ever returned next to an error.
//! - `ErrorClass` groups variants into the three reported categories:
//!   I/O (including malformed input), invalid decomposition, degenerate polygon.

use thiserror::Error;

use crate::boundary::LoopKind;

/// Reporting category of a [`BoundaryError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    Io,
    DecompositionInvalid,
    DegeneratePolygon,
}

/// Errors raised while turning a boundary description into a region.
#[derive(Error, Debug)]
pub enum BoundaryError {
    /// Boundary source missing or unreadable.
    #[error("cannot read boundary {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A coordinate line that is not exactly two finite numbers.
    #[error("line {line}: expected two numbers `x y`, found {content:?}")]
    Parse { line: usize, content: String },

    /// A loop finalized with fewer than three points.
    #[error("loop starting at line {line} has {count} point(s), at least 3 are required")]
    TooFewPoints { line: usize, count: usize },

    /// The convex partition of a loop failed its validity check.
    #[error("convex decomposition of {kind} loop #{index} is invalid: {defect}")]
    DecompositionInvalid {
        kind: LoopKind,
        index: usize,
        #[source]
        defect: PartitionDefect,
    },

    /// A polygon or piece without interior (too few vertices, zero area, unbounded).
    #[error("degenerate polygon: {reason}")]
    DegeneratePolygon { reason: String },
}

impl BoundaryError {
    pub fn class(&self) -> ErrorClass {
        match self {
            BoundaryError::Io { .. }
            | BoundaryError::Parse { .. }
            | BoundaryError::TooFewPoints { .. } => ErrorClass::Io,
            BoundaryError::DecompositionInvalid { .. } => ErrorClass::DecompositionInvalid,
            BoundaryError::DegeneratePolygon { .. } => ErrorClass::DegeneratePolygon,
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        BoundaryError::DegeneratePolygon {
            reason: reason.into(),
        }
    }
}

/// Why a set of pieces is not a valid convex partition of a loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionDefect {
    #[error("loop has no interior: {0}")]
    Degenerate(String),
    #[error("no convex partition by diagonals exists (loop is not simple)")]
    NoPartition,
    #[error("piece {piece} is not a convex counter-clockwise polygon")]
    NotConvex { piece: usize },
    #[error("piece {piece} uses a point that is not a loop vertex")]
    ForeignVertex { piece: usize },
    #[error("edge {from}->{to} is covered {count} time(s)")]
    EdgeMismatch { from: usize, to: usize, count: usize },
    #[error("piece areas do not sum to the loop area")]
    AreaMismatch,
}

/// Errors raised by a tessellation engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("generator count {declared} does not match {supplied} supplied point(s)")]
    GeneratorCountMismatch { declared: usize, supplied: usize },
    #[error("no boundary region assigned")]
    MissingBoundary,
    #[error("no generators assigned")]
    MissingGenerators,
}

/// Errors raised while seeding generators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    #[error("region has no interior to seed")]
    EmptyRegion,
    #[error("placed only {placed} of {requested} generator(s) within the attempt budget")]
    Exhausted { placed: usize, requested: usize },
}

/// Any failure of a full pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
