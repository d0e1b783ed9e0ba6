//! Benchmarks for insertion, neighbor queries and leaf enumeration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_octree::{Octree, OctreeConfig, TraversalMode};

const ROOT_SIZE: f32 = 64.0;
const MIN_SIZE: f32 = 1e-3;

/// Uniformly scattered points inside the root cube.
fn random_points(count: usize, seed: u64) -> Vec<Vec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  let half = ROOT_SIZE * 0.5;
  (0..count)
    .map(|_| {
      Vec3::new(
        rng.random_range(-half..half),
        rng.random_range(-half..half),
        rng.random_range(-half..half),
      )
    })
    .collect()
}

fn build_tree(points: &[Vec3], traversal: TraversalMode) -> Octree {
  let mut config = OctreeConfig::new(Vec3::ZERO, ROOT_SIZE);
  config.traversal = traversal;
  let mut tree = Octree::with_config(config);
  for &point in points {
    let _ = tree.insert(point, MIN_SIZE);
  }
  tree
}

fn bench_insert(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert");
  for count in [1_000usize, 10_000] {
    let points = random_points(count, 42);
    group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
      b.iter(|| black_box(build_tree(points, TraversalMode::Parallel)))
    });
  }
  group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
  let tree = build_tree(&random_points(10_000, 7), TraversalMode::Parallel);
  let leaves: Vec<_> = tree
    .iter()
    .filter(|(_, node)| node.is_leaf())
    .map(|(id, _)| id)
    .take(1_000)
    .collect();

  let mut group = c.benchmark_group("neighbors");
  for direct_only in [true, false] {
    group.bench_with_input(
      BenchmarkId::new("direct_only", direct_only),
      &direct_only,
      |b, &direct_only| {
        b.iter(|| {
          for &leaf in &leaves {
            black_box(tree.neighbors(leaf, false, direct_only));
          }
        })
      },
    );
  }
  group.finish();
}

fn bench_enumeration(c: &mut Criterion) {
  let points = random_points(50_000, 3);
  let mut group = c.benchmark_group("enumeration");
  for mode in [TraversalMode::Parallel, TraversalMode::Sequential] {
    let tree = build_tree(&points, mode);
    group.bench_function(BenchmarkId::new("points", format!("{:?}", mode)), |b| {
      b.iter(|| black_box(tree.points()))
    });
    group.bench_function(BenchmarkId::new("free_spaces", format!("{:?}", mode)), |b| {
      b.iter(|| black_box(tree.free_spaces()))
    });
  }
  group.finish();
}

criterion_group!(benches, bench_insert, bench_neighbors, bench_enumeration);
criterion_main!(benches);
