//! Exact closed half-plane `a·x + b·y + c <= 0`.

use std::cmp::Ordering;

use num_traits::{Signed, Zero};

use crate::exact::{to_f64, Rat, RatPoint};

/// Closed half-plane `a·x + b·y + c <= 0` with exact coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HalfPlane {
    pub a: Rat,
    pub b: Rat,
    pub c: Rat,
}

impl HalfPlane {
    #[inline]
    pub fn new(a: Rat, b: Rat, c: Rat) -> Self {
        Self { a, b, c }
    }

    /// Supporting half-plane of the directed edge `p0 → p1`; the left side is inside.
    ///
    /// `a = p1.y - p0.y`, `b = p0.x - p1.x`, `c = p1.x·p0.y - p0.x·p1.y`, so for a
    /// counter-clockwise polygon the interior evaluates non-positive.
    pub fn from_edge(p0: &RatPoint, p1: &RatPoint) -> Self {
        Self {
            a: &p1.y - &p0.y,
            b: &p0.x - &p1.x,
            c: &p1.x * &p0.y - &p0.x * &p1.y,
        }
    }

    #[inline]
    pub fn eval(&self, p: &RatPoint) -> Rat {
        &self.a * &p.x + &self.b * &p.y + &self.c
    }

    /// Sign of `eval(p)`: `Less` inside, `Equal` on the line, `Greater` outside.
    #[inline]
    pub fn side(&self, p: &RatPoint) -> Ordering {
        let v = self.eval(p);
        if v.is_negative() {
            Ordering::Less
        } else if v.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    #[inline]
    pub fn contains(&self, p: &RatPoint) -> bool {
        self.side(p) != Ordering::Greater
    }

    /// Closure of the complement: same line, opposite side.
    pub fn complement(&self) -> HalfPlane {
        HalfPlane {
            a: -&self.a,
            b: -&self.b,
            c: -&self.c,
        }
    }

    /// `0·x + 0·y + c <= 0`: either the whole plane or nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// Normals are parallel (same or opposite direction).
    #[inline]
    pub fn is_parallel(&self, other: &HalfPlane) -> bool {
        (&self.a * &other.b - &self.b * &other.a).is_zero()
    }

    /// Intersection point of the two boundary lines, `None` when parallel.
    pub fn line_intersection(&self, other: &HalfPlane) -> Option<RatPoint> {
        let det = &self.a * &other.b - &other.a * &self.b;
        if det.is_zero() {
            return None;
        }
        let x = (&self.b * &other.c - &other.b * &self.c) / &det;
        let y = (&other.a * &self.c - &self.a * &other.c) / &det;
        Some(RatPoint::new(x, y))
    }

    /// Float coefficients `[a, b, c]` for display.
    pub fn to_f64(&self) -> [f64; 3] {
        [to_f64(&self.a), to_f64(&self.b), to_f64(&self.c)]
    }
}
