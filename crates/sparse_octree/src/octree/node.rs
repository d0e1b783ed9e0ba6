//! Node - a cube region of the octree, stored in the tree's arena.
//!
//! Nodes are addressed two ways: by [`NodeId`], an index into the owning
//! [`Octree`](super::Octree)'s arena, and by `uid`, the octant-digit path
//! from the root. A node is a leaf (no children, at most one point) or
//! internal (exactly 8 children, no point).

use glam::Vec3;

use super::CubeBounds;
use crate::constants::{octant_digit, octant_signs, CHILD_OFFSET_FACTOR, OCTANT_COUNT};

/// Arena handle for a node.
///
/// Only meaningful for the tree that produced it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
  /// Handle of the root node in every tree.
  pub const ROOT: NodeId = NodeId(0);

  pub(crate) fn from_index(index: usize) -> Self {
    Self(index)
  }

  /// Position of the node in the arena.
  #[inline]
  pub fn index(self) -> usize {
    self.0
  }
}

/// Octree node.
#[derive(Clone, Debug)]
pub struct Node {
  pub(crate) uid: String,
  pub(crate) center: Vec3,
  /// Full edge length.
  pub(crate) size: f32,
  /// All eight present or none.
  pub(crate) children: Option<[NodeId; OCTANT_COUNT]>,
  pub(crate) point: Option<Vec3>,
  /// Height of the subtree rooted here (0 for a leaf).
  pub(crate) max_depth: u32,
  pub(crate) parent: Option<NodeId>,
}

impl Node {
  /// Create a root: empty uid, no parent, no children.
  pub(crate) fn new_root(center: Vec3, size: f32) -> Self {
    Self {
      uid: String::new(),
      center,
      size,
      children: None,
      point: None,
      max_depth: 0,
      parent: None,
    }
  }

  /// Create the child occupying `octant` of this node.
  pub(crate) fn new_child(&self, parent: NodeId, octant: u8) -> Self {
    let mut uid = String::with_capacity(self.uid.len() + 1);
    uid.push_str(&self.uid);
    uid.push(octant_digit(octant));

    Self {
      uid,
      center: self.child_center(octant),
      size: self.size * 0.5,
      children: None,
      point: None,
      max_depth: 0,
      parent: Some(parent),
    }
  }

  /// Octant-digit path from the root.
  pub fn uid(&self) -> &str {
    &self.uid
  }

  /// Cube centroid.
  pub fn center(&self) -> Vec3 {
    self.center
  }

  /// Full edge length.
  pub fn size(&self) -> f32 {
    self.size
  }

  /// Stored point, if this is an occupied leaf.
  pub fn point(&self) -> Option<Vec3> {
    self.point
  }

  /// Children in octant order, if this node is internal.
  pub fn children(&self) -> Option<&[NodeId; OCTANT_COUNT]> {
    self.children.as_ref()
  }

  /// Enclosing node, `None` for the root.
  pub fn parent(&self) -> Option<NodeId> {
    self.parent
  }

  /// Height of the subtree rooted here.
  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  /// Distance from the root (the uid length).
  pub fn depth(&self) -> usize {
    self.uid.len()
  }

  /// Octant of this node within its parent, `None` for the root.
  pub fn octant(&self) -> Option<u8> {
    self.uid.chars().last().and_then(crate::constants::digit_octant)
  }

  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  /// A leaf holding no point.
  pub fn is_free(&self) -> bool {
    self.children.is_none() && self.point.is_none()
  }

  /// Closed cube covered by this node.
  pub fn bounds(&self) -> CubeBounds {
    CubeBounds::from_center_size(self.center, self.size)
  }

  /// Check if `point` lies inside this node's closed cube.
  #[inline]
  pub fn point_fits(&self, point: Vec3) -> bool {
    self.bounds().contains_point(point)
  }

  /// Center of the child at `octant`: this center nudged by a quarter edge
  /// along each axis sign.
  pub fn child_center(&self, octant: u8) -> Vec3 {
    let nudge = Vec3::from_array(octant_signs(octant)) * (self.size * CHILD_OFFSET_FACTOR);
    self.center + nudge
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
