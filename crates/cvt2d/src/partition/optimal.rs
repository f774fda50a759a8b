//! Minimum-piece convex partition of a simple polygon by diagonals.
//!
//! Model
//! - Vertices `0..n` in counter-clockwise order, no repeated or collinear vertices.
//! - `P(a, b)` (a < b) is the sub-polygon on the chain `a, a+1, .., b` closed by
//!   the chord `(b, a)`. Exactly one piece of a partition of `P(a, b)` touches
//!   that chord; it is a convex polygon `a = w0 < w1 < .. < wk = b` whose other
//!   sides are edges or valid diagonals. Every gap `(w_t, w_t+1)` bounds an
//!   independent sub-problem, so
//!   `cost(a, b) = 1 + min over convex chains of Σ cost(w_t, w_t+1)`.
//! - The chain minimum runs over states `(p, q)` = last chain side. Convexity at
//!   an interior chain vertex only needs `(o, p, q)`; the turns at `a` and `b`
//!   involve the fixed chord and are checked on the first and last side.
//! - The whole polygon is `P(0, n-1)`, closed by the edge `(n-1, 0)`.
//!
//! Cost: O(n^3) diagonal tests plus O(n^5 / 120) chain transitions.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::error::PartitionDefect;
use crate::exact::{orient, segments_touch};

const INF: u32 = u32::MAX;

struct Tables<'a> {
    pts: &'a [Vector2<f64>],
    n: usize,
    /// `valid[i * n + j]` for i < j: edge or interior diagonal.
    valid: Vec<bool>,
    /// `cost[i * n + j]` for i < j: min pieces of `P(i, j)`; 0 for edges.
    cost: Vec<u32>,
}

impl<'a> Tables<'a> {
    #[inline]
    fn is_valid(&self, i: usize, j: usize) -> bool {
        self.valid[i * self.n + j]
    }

    #[inline]
    fn cost(&self, i: usize, j: usize) -> u32 {
        self.cost[i * self.n + j]
    }

    #[inline]
    fn left_or_on(&self, a: usize, b: usize, c: usize) -> bool {
        orient(self.pts[a], self.pts[b], self.pts[c]) != Ordering::Less
    }
}

/// Diagonal direction strictly inside the interior angle at `a`.
fn in_cone(pts: &[Vector2<f64>], a: usize, b: usize) -> bool {
    let n = pts.len();
    let a0 = pts[(a + n - 1) % n];
    let a1 = pts[(a + 1) % n];
    let (pa, pb) = (pts[a], pts[b]);
    if orient(a0, pa, a1) == Ordering::Greater {
        orient(pa, pb, a0) == Ordering::Greater && orient(pb, pa, a1) == Ordering::Greater
    } else {
        !(orient(pa, pb, a1) != Ordering::Less && orient(pb, pa, a0) != Ordering::Less)
    }
}

/// True if the open segment `(i, j)` lies in the polygon interior.
fn is_diagonal(pts: &[Vector2<f64>], i: usize, j: usize) -> bool {
    let n = pts.len();
    if !in_cone(pts, i, j) || !in_cone(pts, j, i) {
        return false;
    }
    (0..n).all(|k| {
        let k1 = (k + 1) % n;
        if k == i || k == j || k1 == i || k1 == j {
            return true;
        }
        !segments_touch(pts[i], pts[j], pts[k], pts[k1])
    })
}

/// Best convex piece on chord `(a, b)`: its cost including sub-problems, and its chain.
fn best_piece(t: &Tables<'_>, a: usize, b: usize) -> Option<(u32, Vec<usize>)> {
    let m = b - a + 1;
    let at = |p: usize, q: usize| (p - a) * m + (q - a);
    let mut h = vec![INF; m * m];
    let mut pred = vec![usize::MAX; m * m];

    // First side (a, q): convex turn at `a` between the chord and the side.
    for q in (a + 1)..b {
        if t.is_valid(a, q) && t.cost(a, q) != INF && t.left_or_on(b, a, q) {
            h[at(a, q)] = t.cost(a, q);
        }
    }
    for p in (a + 1)..b {
        for q in (p + 1)..=b {
            if !t.is_valid(p, q) || t.cost(p, q) == INF {
                continue;
            }
            let step = t.cost(p, q);
            let mut best = INF;
            let mut arg = usize::MAX;
            for o in a..p {
                let prev = h[at(o, p)];
                if prev == INF || !t.left_or_on(o, p, q) {
                    continue;
                }
                let total = prev.saturating_add(step);
                if total < best {
                    best = total;
                    arg = o;
                }
            }
            h[at(p, q)] = best;
            pred[at(p, q)] = arg;
        }
    }
    // Last side (p, b): convex turn at `b` closing back to `a`.
    let mut best = INF;
    let mut last = usize::MAX;
    for p in (a + 1)..b {
        let v = h[at(p, b)];
        if v != INF && t.left_or_on(p, b, a) && v < best {
            best = v;
            last = p;
        }
    }
    if best == INF {
        return None;
    }
    let mut chain = vec![b];
    let (mut p, mut q) = (last, b);
    loop {
        chain.push(p);
        if p == a {
            break;
        }
        let o = pred[at(p, q)];
        q = p;
        p = o;
    }
    chain.reverse();
    Some((best.saturating_add(1), chain))
}

/// Minimum convex partition as vertex-index chains (each counter-clockwise).
pub fn optimal_partition_indices(pts: &[Vector2<f64>]) -> Result<Vec<Vec<usize>>, PartitionDefect> {
    let n = pts.len();
    if n < 3 {
        return Err(PartitionDefect::Degenerate(format!("{n} vertex(es)")));
    }
    let mut valid = vec![false; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            valid[i * n + j] = j == i + 1 || (i == 0 && j == n - 1) || is_diagonal(pts, i, j);
        }
    }
    let mut t = Tables {
        pts,
        n,
        valid,
        cost: vec![INF; n * n],
    };
    for i in 0..(n - 1) {
        t.cost[i * n + i + 1] = 0;
    }
    for gap in 2..n {
        for a in 0..(n - gap) {
            let b = a + gap;
            if !t.is_valid(a, b) {
                continue;
            }
            if let Some((c, _)) = best_piece(&t, a, b) {
                t.cost[a * n + b] = c;
            }
        }
    }
    if t.cost(0, n - 1) == INF {
        return Err(PartitionDefect::NoPartition);
    }
    // Rebuild pieces top-down from the stored costs.
    let mut pieces = Vec::with_capacity(t.cost(0, n - 1) as usize);
    let mut stack = vec![(0usize, n - 1)];
    while let Some((a, b)) = stack.pop() {
        let (_, chain) = best_piece(&t, a, b).ok_or(PartitionDefect::NoPartition)?;
        for w in chain.windows(2) {
            if w[1] > w[0] + 1 {
                stack.push((w[0], w[1]));
            }
        }
        pieces.push(chain);
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn triangle_is_one_piece() {
        let tri = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        assert_eq!(optimal_partition_indices(&tri).unwrap(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn diagonal_predicate_on_l_shape() {
        // reflex vertex at index 3
        let l = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert!(is_diagonal(&l, 0, 3));
        assert!(is_diagonal(&l, 1, 3));
        // (2,1)-(1,2) cuts outside the polygon
        assert!(!is_diagonal(&l, 2, 4));
        // (2,0)-(0,2) passes through the reflex vertex (1,1)
        assert!(!is_diagonal(&l, 1, 5));
    }
}
