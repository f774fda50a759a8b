//! Loop clean-up before partitioning: duplicates, collinear vertices, winding.

use std::cmp::Ordering;

use nalgebra::Vector2;
use num_traits::{Signed, Zero};

use crate::error::PartitionDefect;
use crate::exact::{orient, twice_area_f64_points};

/// Counter-clockwise loop without repeated or collinear vertices.
///
/// Returns the cleaned vertex list; the enclosed area is unchanged.
pub fn normalize_loop(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, PartitionDefect> {
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(PartitionDefect::Degenerate("non-finite coordinate".into()));
    }
    let mut pts: Vec<Vector2<f64>> = points.to_vec();
    // Removing a collinear vertex can expose a repeated point (spikes) and vice
    // versa, so alternate both passes until nothing changes.
    loop {
        pts.dedup();
        while pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        let n = pts.len();
        if n < 3 {
            break;
        }
        let keep: Vec<bool> = (0..n)
            .map(|i| orient(pts[(i + n - 1) % n], pts[i], pts[(i + 1) % n]) != Ordering::Equal)
            .collect();
        if keep.iter().all(|&k| k) {
            break;
        }
        let mut flags = keep.into_iter();
        pts.retain(|_| flags.next().unwrap_or(true));
    }
    if pts.len() < 3 {
        return Err(PartitionDefect::Degenerate(format!(
            "{} distinct non-collinear vertex(es)",
            pts.len()
        )));
    }
    let area2 = twice_area_f64_points(&pts)
        .ok_or_else(|| PartitionDefect::Degenerate("non-finite coordinate".into()))?;
    if area2.is_zero() {
        return Err(PartitionDefect::Degenerate("zero area".into()));
    }
    if area2.is_negative() {
        tracing::debug!(vertices = pts.len(), "loop_reoriented_ccw");
        pts.reverse();
    }
    if pts.len() < points.len() {
        tracing::debug!(
            dropped = points.len() - pts.len(),
            "loop_vertices_dropped"
        );
    }
    Ok(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn drops_closing_duplicate_and_collinear() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![5.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
            vector![0.0, 0.0],
        ];
        let out = normalize_loop(&pts).unwrap();
        assert_eq!(
            out,
            vec![
                vector![0.0, 0.0],
                vector![10.0, 0.0],
                vector![10.0, 10.0],
                vector![0.0, 10.0]
            ]
        );
    }

    #[test]
    fn clockwise_is_reversed() {
        let cw = vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ];
        let out = normalize_loop(&cw).unwrap();
        assert_eq!(out[0], vector![1.0, 0.0]);
        assert!(twice_area_f64_points(&out).unwrap().is_positive());
    }

    #[test]
    fn degenerate_inputs() {
        let line = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(matches!(
            normalize_loop(&line),
            Err(PartitionDefect::Degenerate(_))
        ));
        let two = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
        assert!(normalize_loop(&two).is_err());
        let nan = vec![vector![0.0, 0.0], vector![1.0, f64::NAN], vector![2.0, 0.0]];
        assert!(normalize_loop(&nan).is_err());
    }
}
