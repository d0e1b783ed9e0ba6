//! OctreeConfig - root placement and tuning for an [`Octree`](super::Octree).

use glam::Vec3;

use super::CubeBounds;
use crate::constants::{DEFAULT_MIN_SIZE, DEFAULT_PROBE_EPSILON, DEFAULT_ROOT_SIZE};
use crate::threading::TraversalMode;

/// Configuration for an octree.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Centroid of the root cube.
  pub center: Vec3,

  /// Full edge length of the root cube.
  pub size: f32,

  /// Resolution floor used by `insert_default`.
  pub min_size: f32,

  /// How far past a face the neighbor probes are placed.
  pub probe_epsilon: f32,

  /// Walk strategy for point and free-space enumeration.
  pub traversal: TraversalMode,

  /// Log rejected insertions.
  pub verbose: bool,
}

impl OctreeConfig {
  /// Config for a root cube at `center` with edge `size`, defaults elsewhere.
  pub fn new(center: Vec3, size: f32) -> Self {
    Self {
      center,
      size,
      ..Self::default()
    }
  }

  /// Closed bounds of the root cube.
  #[inline]
  pub fn root_bounds(&self) -> CubeBounds {
    CubeBounds::from_center_size(self.center, self.size)
  }

  /// Edge length of nodes at `depth` below the root.
  /// node_size = size / 2^depth
  #[inline]
  pub fn node_size_at_depth(&self, depth: u32) -> f32 {
    self.size * 0.5f32.powi(depth as i32)
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      size: DEFAULT_ROOT_SIZE,
      min_size: DEFAULT_MIN_SIZE,
      probe_epsilon: DEFAULT_PROBE_EPSILON,
      traversal: TraversalMode::Parallel,
      verbose: false,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
