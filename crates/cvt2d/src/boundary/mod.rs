//! Boundary loops: data types and the line-oriented loop parser.
//!
//! Format
//! - A line starting with the marker (`#`) opens a new loop. The rest of the line
//!   equal to the outer token (`Outer`) declares an outer loop; anything else a hole.
//! - Every other non-blank line holds two numbers `x y`, the next vertex of the
//!   current loop.
//!
//! Code cross-refs: `parse::read_loops`, `types::{Loop, LoopKind, BoundaryLoops}`

mod parse;
mod types;

pub use parse::{load_loops, parse_loops, read_loops};
pub use types::{BoundaryLoops, Loop, LoopKind, ParseCfg};

#[cfg(test)]
mod tests;
