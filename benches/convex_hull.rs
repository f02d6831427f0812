use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hullviz::algorithms::Algorithm;
use hullviz::data::Point;

pub fn gen_points(n: usize, rng: &mut SmallRng) -> Vec<Point> {
  (0..n).map(|_| Point::random_in(10_000, 10_000, rng)).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  for &n in &[100, 1_000, 10_000] {
    let pts = gen_points(n, &mut rng);
    for algo in Algorithm::ALL {
      c.bench_function(&format!("{}::compute_hull({})", algo, n), |b| {
        b.iter(|| algo.compute_hull(&pts))
      });
      c.bench_function(&format!("{}::generate_trace({})", algo, n), |b| {
        b.iter_batched(
          || pts.clone(),
          |inp| algo.generate_trace(&inp),
          BatchSize::LargeInput,
        )
      });
    }
  }

  // Arbitrary floats in the unit square rather than grid points.
  let pts: Vec<Point> = (0..10_000).map(|_| rng.gen()).collect();
  for algo in Algorithm::ALL {
    c.bench_function(&format!("{}::compute_hull(unit square, 10000)", algo), |b| {
      b.iter(|| algo.compute_hull(&pts))
    });
  }
}

// Traces copy the hull stack into every step, so generate_trace grows with
// n times the hull size rather than n log n.

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
