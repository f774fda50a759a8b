//! Convex regions in H-representation and their exact vertex enumeration.
//!
//! Purpose
//! - `ConvexRegion` is an intersection of half-planes, starting from the whole
//!   plane. Intersecting is appending; nothing is evaluated until `vertices()`.
//! - `vertices()` classifies the intersection as empty, unbounded or bounded and
//!   returns the exact counter-clockwise vertex cycle in the bounded case.
//!
//! Method
//! - Degenerate rows (`0 <= -c`) are either dropped or make the set empty.
//! - Boundedness: the set is unbounded iff some non-zero direction `d` satisfies
//!   `n_i · d <= 0` for every normal; if such a direction exists it can be taken
//!   perpendicular to one of the normals.
//! - Bounded vertices are the pairwise line intersections satisfying every row;
//!   their convex hull is the region.

use num_traits::{Signed, Zero};

use super::halfplane::HalfPlane;
use crate::exact::{cross, twice_area, Rat, RatPoint};

/// Result of intersecting half-planes. `Empty` also covers sets without interior.
#[derive(Clone, Debug, PartialEq)]
pub enum HalfplaneIntersection {
    Empty,
    Unbounded,
    Bounded(Vec<RatPoint>),
}

impl HalfplaneIntersection {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, HalfplaneIntersection::Empty)
    }
    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self, HalfplaneIntersection::Bounded(_))
    }
    #[inline]
    pub fn vertices(self) -> Option<Vec<RatPoint>> {
        if let HalfplaneIntersection::Bounded(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

/// Intersection of closed half-planes; no planes means the whole plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexRegion {
    pub planes: Vec<HalfPlane>,
}

impl ConvexRegion {
    /// The whole plane.
    #[inline]
    pub fn whole() -> Self {
        Self { planes: Vec::new() }
    }

    /// Intersect with one more half-plane.
    #[inline]
    pub fn insert_halfplane(&mut self, h: HalfPlane) {
        self.planes.push(h);
    }

    /// Return a new region with one additional cut applied.
    #[inline]
    pub fn with_cut(&self, h: HalfPlane) -> ConvexRegion {
        let mut out = self.clone();
        out.insert_halfplane(h);
        out
    }

    /// Intersect with another convex region.
    pub fn intersect(&self, other: &ConvexRegion) -> ConvexRegion {
        let mut planes = self.planes.clone();
        planes.extend(other.planes.iter().cloned());
        ConvexRegion { planes }
    }

    #[inline]
    pub fn contains(&self, p: &RatPoint) -> bool {
        self.planes.iter().all(|h| h.contains(p))
    }

    /// Exact classification and vertex cycle.
    pub fn vertices(&self) -> HalfplaneIntersection {
        let mut rows: Vec<&HalfPlane> = Vec::with_capacity(self.planes.len());
        for h in &self.planes {
            if h.is_degenerate() {
                if h.c.is_positive() {
                    return HalfplaneIntersection::Empty;
                }
            } else {
                rows.push(h);
            }
        }
        if rows.is_empty() {
            return HalfplaneIntersection::Unbounded;
        }
        let mut corners: Vec<RatPoint> = Vec::new();
        for i in 0..rows.len() {
            for j in (i + 1)..rows.len() {
                if let Some(p) = rows[i].line_intersection(rows[j]) {
                    if rows.iter().all(|h| h.contains(&p)) {
                        corners.push(p);
                    }
                }
            }
        }
        if has_recession_direction(&rows) {
            let feasible = !corners.is_empty() || parallel_rows_feasible(&rows);
            return if feasible {
                HalfplaneIntersection::Unbounded
            } else {
                HalfplaneIntersection::Empty
            };
        }
        let hull = convex_hull(corners);
        if hull.len() < 3 || twice_area(&hull).is_zero() {
            return HalfplaneIntersection::Empty;
        }
        HalfplaneIntersection::Bounded(hull)
    }
}

/// Some `d != 0` with `n_i · d <= 0` for all rows.
fn has_recession_direction(rows: &[&HalfPlane]) -> bool {
    rows.iter().any(|h| {
        // d = ±(-b, a), perpendicular to the normal (a, b)
        let dirs = [(-&h.b, h.a.clone()), (h.b.clone(), -&h.a)];
        dirs.iter().any(|(dx, dy)| {
            rows.iter()
                .all(|g| !(&g.a * dx + &g.b * dy).is_positive())
        })
    })
}

/// Feasibility when all normals are parallel: a 1D interval test along the normal.
fn parallel_rows_feasible(rows: &[&HalfPlane]) -> bool {
    let base = rows[0];
    if rows.iter().any(|h| !h.is_parallel(base)) {
        // Pointed set without a feasible corner is empty.
        return false;
    }
    let mut lo: Option<Rat> = None;
    let mut hi: Option<Rat> = None;
    for h in rows {
        // h.n = k · base.n; the row reads k·t + c <= 0 with t = base.n · x
        let k = if !base.a.is_zero() {
            &h.a / &base.a
        } else {
            &h.b / &base.b
        };
        let bound = -&h.c / &k;
        if k.is_positive() {
            hi = Some(match hi {
                Some(v) if v < bound => v,
                _ => bound,
            });
        } else {
            lo = Some(match lo {
                Some(v) if v > bound => v,
                _ => bound,
            });
        }
    }
    match (lo, hi) {
        (Some(l), Some(h)) => l <= h,
        _ => true,
    }
}

/// Andrew's monotone chain on exact points (counter-clockwise, no collinear vertices).
pub fn convex_hull(mut pts: Vec<RatPoint>) -> Vec<RatPoint> {
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<RatPoint> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && !cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p).is_positive() {
            lower.pop();
        }
        lower.push(p.clone());
    }
    let mut upper: Vec<RatPoint> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && !cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p).is_positive() {
            upper.pop();
        }
        upper.push(p.clone());
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
