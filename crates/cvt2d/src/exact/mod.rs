//! Exact arithmetic for boundary geometry.
//!
//! Purpose
//! - Every topological decision (orientation, inside/outside, overlap) is taken
//!   in exact arithmetic. Coordinates arrive as f64; each f64 is converted to a
//!   rational without loss, and orientation tests on raw f64 points use an
//!   adaptive exact predicate.
//! - Floats only come back out through [`to_f64`], for display and export.
//!
//! Contents
//! - `Rat`: arbitrary-precision rational scalar.
//! - `RatPoint`: exact 2D point.
//! - `orient`, `segments_touch`: exact predicates on f64 points.

mod point;
mod predicates;

pub use point::{cross, twice_area, RatPoint};
pub use predicates::{orient, segments_touch, twice_area_f64_points};

use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Exact rational scalar used by half-planes and regions.
pub type Rat = BigRational;

/// Lossless f64 → rational conversion. `None` for NaN and infinities.
#[inline]
pub fn rat(v: f64) -> Option<Rat> {
    Rat::from_float(v)
}

/// The single exact → float conversion (display and export only).
#[inline]
pub fn to_f64(r: &Rat) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}
