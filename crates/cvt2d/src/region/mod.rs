//! Exact planar regions built from convex pieces.
//!
//! Purpose
//! - Express every convex piece as the intersection of its edge half-planes and
//!   combine them without rounding: outer pieces are unioned, hole pieces
//!   subtracted afterwards.
//!
//! Model
//! - `HalfPlane`: `a·x + b·y + c <= 0`, rational coefficients.
//! - `ConvexRegion`: list of half-planes, whole plane when empty; `vertices()`
//!   enumerates the exact polygon or reports empty / unbounded.
//! - `Region`: interior-disjoint convex cells; boolean operations stay exact and
//!   only `area_f64` / `to_polygons_f64` leave rational arithmetic.
//!
//! Code cross-refs: `partition::decompose_all` (producer), `engine::TessellationEngine` (consumer).

mod builder;
mod cells;
mod convex;
mod halfplane;

pub use builder::{build_region, piece_halfplanes, piece_region};
pub use cells::{ConvexCell, Region};
pub use convex::{convex_hull, ConvexRegion, HalfplaneIntersection};
pub use halfplane::HalfPlane;
