//! Criterion benchmarks for decomposition and exact region building.
//! Focus sizes: comb teeth k in {2, 4, 8, 16}; half-plane counts m in {4, 8, 16, 32}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use cvt2d::api::{
    build_region, decompose_all, optimal_convex_partition, BoundaryLoops, ConvexRegion, HalfPlane,
    Loop, LoopKind, RatPoint,
};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Comb with `k` teeth: `2k - 2` reflex vertices, `k` pieces at optimum.
fn comb(k: usize) -> Vec<Vector2<f64>> {
    let mut pts = vec![Vector2::new(0.0, 0.0), Vector2::new((2 * k - 1) as f64, 0.0)];
    for t in (0..k).rev() {
        let x0 = (2 * t) as f64;
        pts.push(Vector2::new(x0 + 1.0, 3.0));
        pts.push(Vector2::new(x0, 3.0));
        if t > 0 {
            pts.push(Vector2::new(x0, 1.0));
            pts.push(Vector2::new(x0 - 1.0, 1.0));
        }
    }
    pts
}

/// Tangent half-planes of a circle with random phases; bounded for m >= 3 spread angles.
fn random_tangents(m: usize, seed: u64) -> ConvexRegion {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut region = ConvexRegion::whole();
    for k in 0..m {
        let th = (k as f64 + rng.gen_range(-0.3..0.3)) * std::f64::consts::TAU / m as f64;
        let (c, s) = (th.cos(), th.sin());
        // tangent point and a second point along the tangent, counter-clockwise
        let p0 = RatPoint::from_f64(Vector2::new(10.0 * c, 10.0 * s));
        let p1 = RatPoint::from_f64(Vector2::new(10.0 * c - s, 10.0 * s + c));
        if let (Some(p0), Some(p1)) = (p0, p1) {
            region.insert_halfplane(HalfPlane::from_edge(&p0, &p1));
        }
    }
    region
}

fn bench_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("region");
    for &k in &[2usize, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("optimal_partition_comb", k), &k, |b, &k| {
            let poly = comb(k);
            b.iter(|| optimal_convex_partition(&poly).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("build_comb_with_hole", k), &k, |b, &k| {
            let mut loops = BoundaryLoops::default();
            loops.push(Loop::new(LoopKind::Outer, comb(k)));
            loops.push(Loop::new(
                LoopKind::Hole,
                vec![
                    Vector2::new(0.25, 0.25),
                    Vector2::new(0.75, 0.25),
                    Vector2::new(0.75, 2.5),
                    Vector2::new(0.25, 2.5),
                ],
            ));
            b.iter_batched(
                || decompose_all(&loops, false).unwrap(),
                |parts| build_region(&parts, false).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    for &m in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("halfplane_intersection", m), &m, |b, &m| {
            b.iter_batched(
                || random_tangents(m, 43),
                |r| r.vertices(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_region);
criterion_main!(benches);
