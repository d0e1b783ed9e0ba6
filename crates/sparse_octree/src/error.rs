//! Error types for insertion and lookup.

use glam::Vec3;
use thiserror::Error;

/// Reasons an octree operation can fail.
///
/// `AlreadyInTree`, `TooSmall` and `OutOfBounds` are ordinary rejections.
/// The remaining kinds mean the tree reached a state the algorithms assume
/// impossible; see [`OctreeError::is_invariant_violation`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OctreeError {
  /// The exact coordinate is already stored. The tree is unchanged.
  #[error("point was already in tree")]
  AlreadyInTree,

  /// The region reached the resolution floor and cannot take the point.
  #[error("node of size {size} is smaller than min size {min_size}")]
  TooSmall { size: f32, min_size: f32 },

  /// The point lies outside the root cube.
  #[error("point {point:?} is outside the root bounds")]
  OutOfBounds { point: Vec3 },

  /// No child of an internal node contains the point.
  #[error("no free space found below node {uid:?}")]
  NoFreeSpace { uid: String },

  /// A point displaced by a subdivision could not be re-homed.
  #[error("displaced point found no new home below node {uid:?}")]
  NewHomeNil { uid: String },

  /// Probe descent found no child containing the probe.
  #[error("no fitting child for probe {probe:?} at depth {depth}")]
  NoFittingChild { probe: Vec3, depth: usize },

  /// The uid does not name a node in the tree.
  #[error("no node with uid {uid:?}")]
  NoFittingNode { uid: String },
}

impl OctreeError {
  /// True for kinds that indicate a bug rather than a normal rejection.
  pub fn is_invariant_violation(&self) -> bool {
    matches!(
      self,
      Self::NoFreeSpace { .. } | Self::NewHomeNil { .. } | Self::NoFittingChild { .. }
    )
  }
}
