use super::*;
use crate::error::{BoundaryError, ErrorClass};
use nalgebra::vector;
use std::io::Write;

fn cfg() -> ParseCfg {
    ParseCfg::default()
}

#[test]
fn outer_then_hole_markers_split_points() {
    let text = "#Outer\n0 0\n10 0\n10 10\n0 10\n#Inner\n2 2\n4 2\n4 4\n";
    let loops = parse_loops(text, &cfg()).unwrap();
    assert_eq!(loops.outer.len(), 1);
    assert_eq!(loops.holes.len(), 1);
    assert_eq!(
        loops.outer[0].points,
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0]
        ]
    );
    assert_eq!(loops.holes[0].kind, LoopKind::Hole);
    assert_eq!(loops.holes[0].points.len(), 3);
}

#[test]
fn marker_finalizes_with_previous_kind() {
    // hole, outer, hole: each loop keeps the kind declared by its own marker
    let text = "#Hole\n0 0\n1 0\n1 1\n#Outer\n5 5\n6 5\n6 6\n#\n7 7\n8 7\n8 8\n";
    let loops = parse_loops(text, &cfg()).unwrap();
    assert_eq!(loops.outer.len(), 1);
    assert_eq!(loops.outer[0].points[0], vector![5.0, 5.0]);
    assert_eq!(loops.holes.len(), 2);
    assert_eq!(loops.holes[0].points[0], vector![0.0, 0.0]);
    assert_eq!(loops.holes[1].points[0], vector![7.0, 7.0]);
}

#[test]
fn points_before_any_marker_form_an_outer_loop() {
    let loops = parse_loops("0 0\n1 0\n0 1\n", &cfg()).unwrap();
    assert_eq!(loops.outer.len(), 1);
    assert!(loops.holes.is_empty());
}

#[test]
fn marker_token_must_match_exactly() {
    // "outer" in lower case is not the outer token
    let loops = parse_loops("#outer\n0 0\n1 0\n0 1\n", &cfg()).unwrap();
    assert!(loops.outer.is_empty());
    assert_eq!(loops.holes.len(), 1);
    // trailing whitespace and CR are tolerated
    let loops = parse_loops("#Outer \r\n0 0\r\n1 0\r\n0 1\r\n", &cfg()).unwrap();
    assert_eq!(loops.outer.len(), 1);
}

#[test]
fn empty_markers_and_blank_lines_are_skipped() {
    let text = "#Outer\n#Outer\n\n0 0\n1 0\n\n0 1\n#Hole\n";
    let loops = parse_loops(text, &cfg()).unwrap();
    assert_eq!(loops.outer.len(), 1);
    assert!(loops.holes.is_empty());
    assert!(parse_loops("", &cfg()).unwrap().is_empty());
}

#[test]
fn malformed_lines_are_rejected() {
    for bad in ["1", "1 2 3", "a b", "1 nan", "1 inf", "1,2"] {
        let text = format!("#Outer\n0 0\n{bad}\n1 1\n");
        match parse_loops(&text, &cfg()) {
            Err(BoundaryError::Parse { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, bad);
            }
            other => panic!("expected parse error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn loops_with_fewer_than_three_points_fail() {
    let err = parse_loops("#Outer\n0 0\n1 0\n0 1\n#Hole\n5 5\n6 6\n", &cfg()).unwrap_err();
    assert!(matches!(
        err,
        BoundaryError::TooFewPoints { line: 5, count: 2 }
    ));
    assert_eq!(err.class(), ErrorClass::Io);
}

#[test]
fn custom_marker_and_token() {
    let cfg = ParseCfg {
        marker: '>',
        outer_token: "shell".to_string(),
    };
    let loops = parse_loops(">shell\n0 0\n1 0\n0 1\n>void\n0.2 0.2\n0.4 0.2\n0.2 0.4\n", &cfg).unwrap();
    assert_eq!(loops.outer.len(), 1);
    assert_eq!(loops.holes.len(), 1);
}

#[test]
fn load_from_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.boundary");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "#Outer\n0 0\n10 0\n10 10\n0 10").unwrap();
    drop(f);
    let loops = load_loops(&path, &cfg()).unwrap();
    assert_eq!(loops.outer[0].points.len(), 4);

    let err = load_loops(dir.path().join("missing.boundary"), &cfg()).unwrap_err();
    assert!(matches!(err, BoundaryError::Io { .. }));
    assert_eq!(err.class(), ErrorClass::Io);
}

#[test]
fn read_loops_from_buffered_reader() {
    let reader = std::io::Cursor::new("#Outer\n-1.5 2e1\n3 -4\n0 0\n");
    let loops = read_loops(reader, &cfg()).unwrap();
    assert_eq!(loops.outer[0].points[0], vector![-1.5, 20.0]);
}
