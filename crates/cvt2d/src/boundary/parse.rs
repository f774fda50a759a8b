//! Line-oriented loop parser as an explicit state machine.
//!
//! States: `Idle` (no marker seen yet), `AccumulatingOuter`, `AccumulatingHole`.
//! A marker line finalizes the loop built so far under the *previous* kind,
//! clears the accumulator, then records the new kind. Points seen while `Idle`
//! start an outer loop.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::Vector2;

use super::types::{BoundaryLoops, Loop, LoopKind, ParseCfg};
use crate::error::BoundaryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    AccumulatingOuter,
    AccumulatingHole,
}

impl State {
    fn entered_by(kind: LoopKind) -> Self {
        match kind {
            LoopKind::Outer => State::AccumulatingOuter,
            LoopKind::Hole => State::AccumulatingHole,
        }
    }

    fn kind(self) -> LoopKind {
        match self {
            State::Idle | State::AccumulatingOuter => LoopKind::Outer,
            State::AccumulatingHole => LoopKind::Hole,
        }
    }
}

struct Accumulator {
    state: State,
    points: Vec<Vector2<f64>>,
    /// Line that opened the current loop (marker or first point).
    opened_at: usize,
    out: BoundaryLoops,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            state: State::Idle,
            points: Vec::new(),
            opened_at: 1,
            out: BoundaryLoops::default(),
        }
    }

    fn on_marker(&mut self, kind: LoopKind, line: usize) -> Result<(), BoundaryError> {
        self.finalize()?;
        self.state = State::entered_by(kind);
        self.opened_at = line;
        Ok(())
    }

    fn on_point(&mut self, p: Vector2<f64>, line: usize) {
        if self.state == State::Idle {
            self.state = State::AccumulatingOuter;
            self.opened_at = line;
        }
        self.points.push(p);
    }

    fn finalize(&mut self) -> Result<(), BoundaryError> {
        if self.points.is_empty() {
            return Ok(());
        }
        if self.points.len() < 3 {
            return Err(BoundaryError::TooFewPoints {
                line: self.opened_at,
                count: self.points.len(),
            });
        }
        let points = std::mem::take(&mut self.points);
        self.out.push(Loop::new(self.state.kind(), points));
        Ok(())
    }

    fn finish(mut self) -> Result<BoundaryLoops, BoundaryError> {
        self.finalize()?;
        Ok(self.out)
    }
}

/// Two whitespace-separated finite numbers, nothing else.
fn parse_point(line: &str) -> Option<Vector2<f64>> {
    let mut fields = line.split_whitespace();
    let x: f64 = fields.next()?.parse().ok()?;
    let y: f64 = fields.next()?.parse().ok()?;
    if fields.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Vector2::new(x, y))
}

fn read_named<R: BufRead>(
    reader: R,
    cfg: &ParseCfg,
    context: &str,
) -> Result<BoundaryLoops, BoundaryError> {
    let mut acc = Accumulator::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| BoundaryError::Io {
            context: context.to_string(),
            source,
        })?;
        if let Some(rest) = line.strip_prefix(cfg.marker) {
            let kind = if rest.trim_end() == cfg.outer_token {
                LoopKind::Outer
            } else {
                LoopKind::Hole
            };
            acc.on_marker(kind, line_no)?;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let p = parse_point(&line).ok_or_else(|| BoundaryError::Parse {
            line: line_no,
            content: line.clone(),
        })?;
        acc.on_point(p, line_no);
    }
    acc.finish()
}

/// Parse loops from any buffered reader.
pub fn read_loops<R: BufRead>(reader: R, cfg: &ParseCfg) -> Result<BoundaryLoops, BoundaryError> {
    read_named(reader, cfg, "<stream>")
}

/// Parse loops from an in-memory string.
pub fn parse_loops(text: &str, cfg: &ParseCfg) -> Result<BoundaryLoops, BoundaryError> {
    read_named(text.as_bytes(), cfg, "<string>")
}

/// Open and parse a boundary file.
pub fn load_loops<P: AsRef<Path>>(path: P, cfg: &ParseCfg) -> Result<BoundaryLoops, BoundaryError> {
    let path = path.as_ref();
    let context = path.display().to_string();
    let file = File::open(path).map_err(|source| BoundaryError::Io {
        context: context.clone(),
        source,
    })?;
    let loops = read_named(BufReader::new(file), cfg, &context)?;
    tracing::debug!(
        path = %context,
        outer = loops.outer.len(),
        holes = loops.holes.len(),
        "boundary_loaded"
    );
    Ok(loops)
}
