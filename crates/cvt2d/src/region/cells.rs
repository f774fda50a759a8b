//! Exact planar region as a set of interior-disjoint convex cells.
//!
//! Invariants
//! - Every cell is convex, counter-clockwise, with positive area and exact vertices.
//! - Cells of one region overlap at most along boundaries.
//!
//! Boolean operations are regularized (results without interior are dropped):
//! - `A − C` for convex `C` with half-planes `h_1..h_m` is the disjoint union of
//!   `A ∩ h_1 ∩ .. ∩ h_{k-1} ∩ ¬h_k`;
//! - `A ∪ B = A + (B − A)`, `A ∩ B` = pairwise cell clipping.

use std::ops::{BitAnd, BitOr, BitOrAssign, Sub, SubAssign};

use nalgebra::Vector2;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::convex::{ConvexRegion, HalfplaneIntersection};
use super::halfplane::HalfPlane;
use crate::exact::{to_f64, twice_area, Rat, RatPoint};

/// Convex polygon with exact vertices (counter-clockwise, positive area).
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexCell {
    vertices: Vec<RatPoint>,
}

impl ConvexCell {
    /// Accepts a counter-clockwise convex cycle; `None` if it has no interior.
    pub fn from_ccw(vertices: Vec<RatPoint>) -> Option<Self> {
        if vertices.len() < 3 || !twice_area(&vertices).is_positive() {
            return None;
        }
        Some(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[RatPoint] {
        &self.vertices
    }

    /// Supporting half-planes of the edges.
    pub fn planes(&self) -> Vec<HalfPlane> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| HalfPlane::from_edge(&self.vertices[i], &self.vertices[(i + 1) % n]))
            .collect()
    }

    pub fn to_convex_region(&self) -> ConvexRegion {
        ConvexRegion {
            planes: self.planes(),
        }
    }

    /// Exact area.
    pub fn area(&self) -> Rat {
        twice_area(&self.vertices) / Rat::from_integer(BigInt::from(2))
    }

    /// Closed containment.
    pub fn contains(&self, p: &RatPoint) -> bool {
        self.planes().iter().all(|h| h.contains(p))
    }

    /// Axis-aligned bounds `(min, max)`.
    pub fn bounds(&self) -> (RatPoint, RatPoint) {
        let mut lo = self.vertices[0].clone();
        let mut hi = self.vertices[0].clone();
        for v in &self.vertices[1..] {
            if v.x < lo.x {
                lo.x = v.x.clone();
            }
            if v.y < lo.y {
                lo.y = v.y.clone();
            }
            if v.x > hi.x {
                hi.x = v.x.clone();
            }
            if v.y > hi.y {
                hi.y = v.y.clone();
            }
        }
        (lo, hi)
    }

    fn bounds_overlap(&self, other: &ConvexCell) -> bool {
        let (a_lo, a_hi) = self.bounds();
        let (b_lo, b_hi) = other.bounds();
        a_lo.x < b_hi.x && b_lo.x < a_hi.x && a_lo.y < b_hi.y && b_lo.y < a_hi.y
    }

    /// Clip by a closed half-plane (Sutherland–Hodgman, exact).
    pub fn clip(&self, h: &HalfPlane) -> Option<ConvexCell> {
        let n = self.vertices.len();
        let vals: Vec<Rat> = self.vertices.iter().map(|v| h.eval(v)).collect();
        if vals.iter().all(|v| !v.is_positive()) {
            return Some(self.clone());
        }
        if vals.iter().all(|v| !v.is_negative()) {
            return None;
        }
        let mut out: Vec<RatPoint> = Vec::with_capacity(n + 1);
        for i in 0..n {
            let j = (i + 1) % n;
            let (ec, en) = (&vals[i], &vals[j]);
            if !ec.is_positive() {
                out.push(self.vertices[i].clone());
            }
            let crosses = (ec.is_negative() && en.is_positive()) || (ec.is_positive() && en.is_negative());
            if crosses {
                let t = ec / (ec - en);
                out.push(self.vertices[i].lerp(&self.vertices[j], &t));
            }
        }
        ConvexCell::from_ccw(out)
    }

    /// Intersection with another cell.
    pub fn intersect(&self, other: &ConvexCell) -> Option<ConvexCell> {
        if !self.bounds_overlap(other) {
            return None;
        }
        let mut cur = self.clone();
        for h in other.planes() {
            cur = cur.clip(&h)?;
        }
        Some(cur)
    }

    /// `self − other` as interior-disjoint cells.
    pub fn subtract(&self, other: &ConvexCell) -> Vec<ConvexCell> {
        if self.intersect(other).is_none() {
            return vec![self.clone()];
        }
        let mut out = Vec::new();
        let mut rest = self.clone();
        for h in other.planes() {
            if let Some(outside) = rest.clip(&h.complement()) {
                out.push(outside);
            }
            match rest.clip(&h) {
                Some(inside) => rest = inside,
                None => break,
            }
        }
        out
    }

    pub fn to_polygon_f64(&self) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(RatPoint::to_f64).collect()
    }
}

/// Exact planar region: a union of interior-disjoint convex cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    cells: Vec<ConvexCell>,
}

impl Region {
    #[inline]
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cell(cell: ConvexCell) -> Self {
        Self { cells: vec![cell] }
    }

    /// Bounded convex region → region; `Empty`/`Unbounded` are returned as the error value.
    pub fn from_convex(c: &ConvexRegion) -> Result<Self, HalfplaneIntersection> {
        match c.vertices() {
            HalfplaneIntersection::Bounded(v) => ConvexCell::from_ccw(v)
                .map(Region::from_cell)
                .ok_or(HalfplaneIntersection::Empty),
            other => Err(other),
        }
    }

    #[inline]
    pub fn cells(&self) -> &[ConvexCell] {
        &self.cells
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Exact area.
    pub fn area(&self) -> Rat {
        self.cells.iter().fold(Rat::zero(), |acc, c| acc + c.area())
    }

    /// Float area for diagnostics.
    pub fn area_f64(&self) -> f64 {
        to_f64(&self.area())
    }

    /// Closed containment (boundary points count as inside).
    pub fn contains(&self, p: &RatPoint) -> bool {
        self.cells.iter().any(|c| c.contains(p))
    }

    /// Exact containment of a float point; non-finite points are outside.
    pub fn contains_f64(&self, p: Vector2<f64>) -> bool {
        RatPoint::from_f64(p).is_some_and(|q| self.contains(&q))
    }

    /// Float bounding box `(min, max)`, `None` for the empty region.
    pub fn bounding_box(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let mut it = self.cells.iter().map(ConvexCell::bounds);
        let (mut lo, mut hi) = it.next()?;
        for (l, h) in it {
            if l.x < lo.x {
                lo.x = l.x;
            }
            if l.y < lo.y {
                lo.y = l.y;
            }
            if h.x > hi.x {
                hi.x = h.x;
            }
            if h.y > hi.y {
                hi.y = h.y;
            }
        }
        Some((lo.to_f64(), hi.to_f64()))
    }

    pub fn union(&self, other: &Region) -> Region {
        let mut fresh: Vec<ConvexCell> = other.cells.clone();
        for mine in &self.cells {
            fresh = fresh.iter().flat_map(|c| c.subtract(mine)).collect();
            if fresh.is_empty() {
                break;
            }
        }
        let mut cells = self.cells.clone();
        cells.extend(fresh);
        Region { cells }
    }

    pub fn difference(&self, other: &Region) -> Region {
        let mut cells = self.cells.clone();
        for theirs in &other.cells {
            cells = cells.iter().flat_map(|c| c.subtract(theirs)).collect();
            if cells.is_empty() {
                break;
            }
        }
        Region { cells }
    }

    pub fn intersection(&self, other: &Region) -> Region {
        let cells = self
            .cells
            .iter()
            .flat_map(|a| other.cells.iter().filter_map(move |b| a.intersect(b)))
            .collect();
        Region { cells }
    }

    /// Float polygons (one per cell) for export.
    pub fn to_polygons_f64(&self) -> Vec<Vec<Vector2<f64>>> {
        self.cells.iter().map(ConvexCell::to_polygon_f64).collect()
    }
}

impl BitOr<&Region> for &Region {
    type Output = Region;
    fn bitor(self, rhs: &Region) -> Region {
        self.union(rhs)
    }
}

impl BitAnd<&Region> for &Region {
    type Output = Region;
    fn bitand(self, rhs: &Region) -> Region {
        self.intersection(rhs)
    }
}

impl Sub<&Region> for &Region {
    type Output = Region;
    fn sub(self, rhs: &Region) -> Region {
        self.difference(rhs)
    }
}

impl BitOrAssign<&Region> for Region {
    fn bitor_assign(&mut self, rhs: &Region) {
        *self = self.union(rhs);
    }
}

impl SubAssign<&Region> for Region {
    fn sub_assign(&mut self, rhs: &Region) {
        *self = self.difference(rhs);
    }
}
