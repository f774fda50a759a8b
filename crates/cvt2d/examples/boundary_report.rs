//! Print partition and region statistics for a boundary file.
//!
//! Usage:
//!   cargo run -p cvt2d --example boundary_report -- path/to/shape.boundary
//!   cargo run -p cvt2d --example boundary_report          (built-in framed square)

use cvt2d::api::{build_region_from_path, build_region_from_str, PipelineCfg};

const FRAMED_SQUARE: &str = "#Outer\n0 0\n10 0\n10 10\n0 10\n#Inner\n3 3\n3 7\n7 7\n7 3\n";

fn main() {
    let cfg = PipelineCfg::default();
    let built = match std::env::args().nth(1) {
        Some(path) => build_region_from_path(&path, &cfg),
        None => build_region_from_str(FRAMED_SQUARE, &cfg),
    };
    let built = match built {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error ({:?}): {e}", e.class());
            std::process::exit(2);
        }
    };
    let s = built.stats;
    println!("Outer: {}, Inner: {}", s.outer_pieces, s.hole_pieces);
    println!("loops: {} outer, {} hole", s.outer_loops, s.hole_loops);
    println!("cells: {}, area: {}", s.cells, s.area);
    if let Some((lo, hi)) = built.region.bounding_box() {
        println!("bbox: ({}, {}) - ({}, {})", lo.x, lo.y, hi.x, hi.y);
    }
    for (i, poly) in built.region.to_polygons_f64().iter().enumerate() {
        let verts: Vec<String> = poly.iter().map(|v| format!("({}, {})", v.x, v.y)).collect();
        println!("cell {i}: {}", verts.join(" "));
    }
}
