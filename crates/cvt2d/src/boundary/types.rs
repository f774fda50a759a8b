//! Loop data types and parser configuration.

use std::fmt;

use nalgebra::Vector2;

/// Whether a loop adds to or removes from the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopKind {
    Outer,
    Hole,
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopKind::Outer => f.write_str("outer"),
            LoopKind::Hole => f.write_str("hole"),
        }
    }
}

/// Closed vertex sequence; the last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Loop {
    pub kind: LoopKind,
    pub points: Vec<Vector2<f64>>,
}

impl Loop {
    #[inline]
    pub fn new(kind: LoopKind, points: Vec<Vector2<f64>>) -> Self {
        Self { kind, points }
    }
}

/// Parser output: loops grouped by kind, each group in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryLoops {
    pub outer: Vec<Loop>,
    pub holes: Vec<Loop>,
}

impl BoundaryLoops {
    pub fn push(&mut self, lp: Loop) {
        match lp.kind {
            LoopKind::Outer => self.outer.push(lp),
            LoopKind::Hole => self.holes.push(lp),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty() && self.holes.is_empty()
    }
}

/// Parser configuration: marker character and the token naming outer loops.
#[derive(Clone, Debug)]
pub struct ParseCfg {
    pub marker: char,
    pub outer_token: String,
}

impl Default for ParseCfg {
    fn default() -> Self {
        Self {
            marker: '#',
            outer_token: "Outer".to_string(),
        }
    }
}
