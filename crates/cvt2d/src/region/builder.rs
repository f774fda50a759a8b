//! Convex pieces → exact region: `union(outer) − union(holes)`.

use rayon::prelude::*;

use crate::error::BoundaryError;
use crate::exact::RatPoint;
use crate::partition::{ConvexPiece, PartitionedLoops};

use super::cells::Region;
use super::convex::{ConvexRegion, HalfplaneIntersection};
use super::halfplane::HalfPlane;

/// H-representation of a counter-clockwise convex piece: one half-plane per edge.
pub fn piece_halfplanes(piece: &ConvexPiece) -> Result<ConvexRegion, BoundaryError> {
    let n = piece.vertices.len();
    if n < 3 {
        return Err(BoundaryError::degenerate(format!(
            "convex piece has {n} vertex(es)"
        )));
    }
    let pts: Vec<RatPoint> = piece
        .vertices
        .iter()
        .map(|&v| RatPoint::from_f64(v))
        .collect::<Option<_>>()
        .ok_or_else(|| BoundaryError::degenerate("convex piece has a non-finite vertex"))?;
    let mut region = ConvexRegion::whole();
    for i in 0..n {
        region.insert_halfplane(HalfPlane::from_edge(&pts[i], &pts[(i + 1) % n]));
    }
    Ok(region)
}

/// Exact region of one piece; empty or unbounded intersections are degenerate.
pub fn piece_region(piece: &ConvexPiece) -> Result<Region, BoundaryError> {
    let planes = piece_halfplanes(piece)?;
    Region::from_convex(&planes).map_err(|hpi| match hpi {
        HalfplaneIntersection::Unbounded => {
            BoundaryError::degenerate("half-plane intersection of a piece is unbounded")
        }
        _ => BoundaryError::degenerate("half-plane intersection of a piece is empty"),
    })
}

fn piece_regions(pieces: &[ConvexPiece], parallel: bool) -> Result<Vec<Region>, BoundaryError> {
    if parallel {
        pieces.par_iter().map(piece_region).collect()
    } else {
        pieces.iter().map(piece_region).collect()
    }
}

/// Union every outer piece, then subtract every hole piece, in order.
///
/// `parallel` only spreads the per-piece conversion; the boolean fold is sequential.
pub fn build_region(parts: &PartitionedLoops, parallel: bool) -> Result<Region, BoundaryError> {
    let outer = piece_regions(&parts.outer, parallel)?;
    let holes = piece_regions(&parts.holes, parallel)?;
    let mut region = Region::empty();
    for r in &outer {
        region |= r;
    }
    for r in &holes {
        region -= r;
    }
    tracing::info!(
        cells = region.cells().len(),
        area = region.area_f64(),
        "region_built"
    );
    Ok(region)
}
