use nalgebra::Vector2;
use num_traits::Zero;

use super::{rat, to_f64, Rat};

/// Exact 2D point. Ordered lexicographically by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RatPoint {
    pub x: Rat,
    pub y: Rat,
}

impl RatPoint {
    #[inline]
    pub fn new(x: Rat, y: Rat) -> Self {
        Self { x, y }
    }

    /// Lossless conversion from a float point; `None` if a coordinate is not finite.
    pub fn from_f64(p: Vector2<f64>) -> Option<Self> {
        Some(Self {
            x: rat(p.x)?,
            y: rat(p.y)?,
        })
    }

    /// Float approximation for display and export.
    pub fn to_f64(&self) -> Vector2<f64> {
        Vector2::new(to_f64(&self.x), to_f64(&self.y))
    }

    /// `self + (other - self) * t`.
    pub fn lerp(&self, other: &RatPoint, t: &Rat) -> RatPoint {
        RatPoint {
            x: &self.x + (&other.x - &self.x) * t,
            y: &self.y + (&other.y - &self.y) * t,
        }
    }
}

/// Cross product `(a - o) × (b - o)`; positive for a counter-clockwise turn o→a→b.
pub fn cross(o: &RatPoint, a: &RatPoint, b: &RatPoint) -> Rat {
    (&a.x - &o.x) * (&b.y - &o.y) - (&a.y - &o.y) * (&b.x - &o.x)
}

/// Twice the signed (shoelace) area of a closed vertex sequence.
pub fn twice_area(verts: &[RatPoint]) -> Rat {
    let n = verts.len();
    if n < 3 {
        return Rat::zero();
    }
    let mut acc = Rat::zero();
    for i in 0..n {
        let p = &verts[i];
        let q = &verts[(i + 1) % n];
        acc += &p.x * &q.y - &q.x * &p.y;
    }
    acc
}
