//! Convex decomposition of boundary loops.
//!
//! Purpose
//! - Split every loop into the minimum number of convex pieces (diagonals only,
//!   no Steiner points) and gate the result through an exact validity check.
//! - Loops are independent; `decompose_all` can spread them over rayon workers
//!   and still returns pieces in loop order.
//!
//! Code cross-refs: `optimal::optimal_partition_indices`, `validity::partition_is_valid`,
//! `region::build_region` (consumer).

mod normalize;
mod optimal;
mod validity;

pub use normalize::normalize_loop;
pub use validity::{is_convex_ccw, partition_is_valid};

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::boundary::{BoundaryLoops, Loop};
use crate::error::{BoundaryError, PartitionDefect};

/// Convex polygon in counter-clockwise order; vertices are loop vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPiece {
    pub vertices: Vec<Vector2<f64>>,
}

impl ConvexPiece {
    #[inline]
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }
}

/// Pieces of all loops, grouped by loop kind.
#[derive(Clone, Debug, Default)]
pub struct PartitionedLoops {
    pub outer: Vec<ConvexPiece>,
    pub holes: Vec<ConvexPiece>,
}

/// Minimum convex partition of a simple loop (either winding); no validity gate.
pub fn optimal_convex_partition(points: &[Vector2<f64>]) -> Result<Vec<ConvexPiece>, PartitionDefect> {
    let poly = normalize_loop(points)?;
    let chains = optimal::optimal_partition_indices(&poly)?;
    Ok(chains
        .into_iter()
        .map(|chain| ConvexPiece::new(chain.into_iter().map(|i| poly[i]).collect()))
        .collect())
}

/// Partition one loop and verify the result; `index` is the loop's position within its kind.
pub fn decompose_loop(lp: &Loop, index: usize) -> Result<Vec<ConvexPiece>, BoundaryError> {
    let wrap = |defect: PartitionDefect| match defect {
        PartitionDefect::Degenerate(reason) => {
            BoundaryError::degenerate(format!("{} loop #{index}: {reason}", lp.kind))
        }
        defect => BoundaryError::DecompositionInvalid {
            kind: lp.kind,
            index,
            defect,
        },
    };
    let pieces = optimal_convex_partition(&lp.points).map_err(wrap)?;
    partition_is_valid(&lp.points, &pieces).map_err(wrap)?;
    tracing::debug!(
        kind = %lp.kind,
        index,
        vertices = lp.points.len(),
        pieces = pieces.len(),
        "loop_partitioned"
    );
    Ok(pieces)
}

fn decompose_kind(loops: &[Loop], parallel: bool) -> Result<Vec<ConvexPiece>, BoundaryError> {
    let per_loop: Vec<Vec<ConvexPiece>> = if parallel {
        loops
            .par_iter()
            .enumerate()
            .map(|(i, lp)| decompose_loop(lp, i))
            .collect::<Result<_, _>>()?
    } else {
        loops
            .iter()
            .enumerate()
            .map(|(i, lp)| decompose_loop(lp, i))
            .collect::<Result<_, _>>()?
    };
    Ok(per_loop.into_iter().flatten().collect())
}

/// Partition every outer and hole loop; pieces keep loop order within each kind.
pub fn decompose_all(loops: &BoundaryLoops, parallel: bool) -> Result<PartitionedLoops, BoundaryError> {
    tracing::info!(
        outer_loops = loops.outer.len(),
        hole_loops = loops.holes.len(),
        "partitioning"
    );
    let out = PartitionedLoops {
        outer: decompose_kind(&loops.outer, parallel)?,
        holes: decompose_kind(&loops.holes, parallel)?,
    };
    tracing::info!(
        outer = out.outer.len(),
        inner = out.holes.len(),
        "partition_result"
    );
    Ok(out)
}
