use std::cmp::Ordering;

use nalgebra::Vector2;
use num_traits::Zero;
use robust::{orient2d, Coord};

use super::{rat, Rat};

/// Exact orientation of the triple `(a, b, c)`.
///
/// `Greater` for a counter-clockwise turn, `Less` for clockwise, `Equal` for collinear.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Ordering {
    let det = orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    );
    det.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

#[inline]
fn within_box(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Closed segment test: true if `[p1, p2]` and `[q1, q2]` share at least one point.
pub fn segments_touch(p1: Vector2<f64>, p2: Vector2<f64>, q1: Vector2<f64>, q2: Vector2<f64>) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);
    let straddles = |a: Ordering, b: Ordering| {
        matches!(
            (a, b),
            (Ordering::Less, Ordering::Greater) | (Ordering::Greater, Ordering::Less)
        )
    };
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }
    (d1 == Ordering::Equal && within_box(q1, q2, p1))
        || (d2 == Ordering::Equal && within_box(q1, q2, p2))
        || (d3 == Ordering::Equal && within_box(p1, p2, q1))
        || (d4 == Ordering::Equal && within_box(p1, p2, q2))
}

/// Exact twice-signed area of a float polygon. `None` if a coordinate is not finite.
pub fn twice_area_f64_points(points: &[Vector2<f64>]) -> Option<Rat> {
    let n = points.len();
    let mut acc = Rat::zero();
    if n < 3 {
        return Some(acc);
    }
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += rat(p.x)? * rat(q.y)? - rat(q.x)? * rat(p.y)?;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orient_signs() {
        let o = vector![0.0, 0.0];
        assert_eq!(orient(o, vector![1.0, 0.0], vector![0.0, 1.0]), Ordering::Greater);
        assert_eq!(orient(o, vector![0.0, 1.0], vector![1.0, 0.0]), Ordering::Less);
        assert_eq!(orient(o, vector![1.0, 1.0], vector![3.0, 3.0]), Ordering::Equal);
        // Nearly collinear input where naive f64 evaluation is unreliable.
        let a = vector![0.1, 0.1];
        let b = vector![0.2, 0.2];
        let c = vector![0.30000000000000004, 0.30000000000000004];
        assert_eq!(orient(a, b, c), Ordering::Equal);
    }

    #[test]
    fn segments_touch_cases() {
        let p = |x: f64, y: f64| vector![x, y];
        assert!(segments_touch(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
        // touching at an endpoint counts
        assert!(segments_touch(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0)));
        // collinear overlap
        assert!(segments_touch(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
        // collinear, disjoint
        assert!(!segments_touch(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
        assert!(!segments_touch(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)));
    }

    #[test]
    fn exact_area_of_square() {
        let sq = [
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ];
        assert_eq!(twice_area_f64_points(&sq), rat(200.0));
    }
}
