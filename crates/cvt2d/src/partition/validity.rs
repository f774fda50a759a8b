//! Partition validity gate.
//!
//! A piece set is accepted as a partition of a loop when
//! - every piece is a convex, counter-clockwise polygon with positive area,
//! - every piece vertex is a loop vertex,
//! - every loop edge is covered exactly once in loop direction and never reversed,
//! - every other piece side is a diagonal used exactly once in each direction,
//! - the exact piece areas sum to the exact loop area.

use std::cmp::Ordering;
use std::collections::HashMap;

use nalgebra::Vector2;
use num_traits::{Signed, Zero};

use super::normalize::normalize_loop;
use super::ConvexPiece;
use crate::error::PartitionDefect;
use crate::exact::{orient, twice_area_f64_points, Rat};

#[inline]
fn key(p: Vector2<f64>) -> (u64, u64) {
    // -0.0 and 0.0 are the same vertex
    let canon = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
    (canon(p.x), canon(p.y))
}

/// Convex (non-strict turns), counter-clockwise, winding exactly once.
pub fn is_convex_ccw(verts: &[Vector2<f64>]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a = verts[(i + n - 1) % n];
        let b = verts[i];
        let c = verts[(i + 1) % n];
        match orient(a, b, c) {
            Ordering::Less => return false,
            // a straight vertex must continue forward, not fold back
            Ordering::Equal if (b - a).dot(&(c - b)) <= 0.0 => return false,
            _ => {}
        }
    }
    // All turns non-negative; a single lowest vertex rules out multiple windings.
    let lower = |p: Vector2<f64>, q: Vector2<f64>| p.y < q.y || (p.y == q.y && p.x < q.x);
    let minima = (0..n)
        .filter(|&i| lower(verts[i], verts[(i + n - 1) % n]) && lower(verts[i], verts[(i + 1) % n]))
        .count();
    if minima != 1 {
        return false;
    }
    matches!(twice_area_f64_points(verts), Some(a) if a.is_positive())
}

/// Check that `pieces` partition the loop `points` (any winding).
pub fn partition_is_valid(
    points: &[Vector2<f64>],
    pieces: &[ConvexPiece],
) -> Result<(), PartitionDefect> {
    let poly = normalize_loop(points)?;
    let n = poly.len();
    let index: HashMap<(u64, u64), usize> =
        poly.iter().enumerate().map(|(i, &p)| (key(p), i)).collect();

    let mut sides: HashMap<(usize, usize), usize> = HashMap::new();
    let mut area_sum = Rat::zero();
    for (k, piece) in pieces.iter().enumerate() {
        if !is_convex_ccw(&piece.vertices) {
            return Err(PartitionDefect::NotConvex { piece: k });
        }
        let ids = piece
            .vertices
            .iter()
            .map(|&p| index.get(&key(p)).copied())
            .collect::<Option<Vec<usize>>>()
            .ok_or(PartitionDefect::ForeignVertex { piece: k })?;
        for t in 0..ids.len() {
            let side = (ids[t], ids[(t + 1) % ids.len()]);
            *sides.entry(side).or_insert(0) += 1;
        }
        area_sum += twice_area_f64_points(&piece.vertices).ok_or(PartitionDefect::NotConvex { piece: k })?;
    }

    let count = |sides: &HashMap<(usize, usize), usize>, from: usize, to: usize| {
        sides.get(&(from, to)).copied().unwrap_or(0)
    };
    for i in 0..n {
        let j = (i + 1) % n;
        if count(&sides, i, j) != 1 {
            return Err(PartitionDefect::EdgeMismatch {
                from: i,
                to: j,
                count: count(&sides, i, j),
            });
        }
        if count(&sides, j, i) != 0 {
            return Err(PartitionDefect::EdgeMismatch {
                from: j,
                to: i,
                count: count(&sides, j, i),
            });
        }
    }
    for (&(from, to), &c) in &sides {
        let boundary = to == (from + 1) % n || from == (to + 1) % n;
        if boundary {
            continue;
        }
        if c != 1 || count(&sides, to, from) != 1 {
            return Err(PartitionDefect::EdgeMismatch { from, to, count: c });
        }
    }

    let loop_area = twice_area_f64_points(&poly)
        .ok_or_else(|| PartitionDefect::Degenerate("non-finite coordinate".into()))?;
    if area_sum != loop_area {
        return Err(PartitionDefect::AreaMismatch);
    }
    Ok(())
}
