//! Octree - arena that owns every node and the root.
//!
//! Nodes live in a growable `Vec` and refer to each other by [`NodeId`].
//! Nodes are only ever appended (by subdivision), never removed, so a
//! `NodeId` stays valid for the lifetime of its tree.

use glam::Vec3;

use super::{Node, NodeId, OctreeConfig};
use crate::constants::{octant_index, OCTANT_COUNT};

/// Sparse octree over 3D points.
///
/// Mutation (`insert`) takes `&mut self` and every query takes `&self`, so a
/// traversal can never overlap an insertion.
#[derive(Clone, Debug)]
pub struct Octree {
  pub(crate) nodes: Vec<Node>,
  pub(crate) config: OctreeConfig,
}

impl Octree {
  /// Create a tree whose root cube is centered at `center` with edge `size`.
  pub fn new(center: Vec3, size: f32) -> Self {
    Self::with_config(OctreeConfig::new(center, size))
  }

  /// Create a tree from a full configuration.
  ///
  /// # Panics
  /// Debug-asserts that the root size is positive and finite.
  pub fn with_config(config: OctreeConfig) -> Self {
    debug_assert!(
      config.size.is_finite() && config.size > 0.0,
      "root size must be positive and finite"
    );
    Self {
      nodes: vec![Node::new_root(config.center, config.size)],
      config,
    }
  }

  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Handle of the root node.
  #[inline]
  pub fn root(&self) -> NodeId {
    NodeId::ROOT
  }

  pub fn root_node(&self) -> &Node {
    &self.nodes[NodeId::ROOT.index()]
  }

  /// Node behind a handle.
  ///
  /// # Panics
  /// Panics if `id` was not produced by this tree.
  #[inline]
  pub fn node(&self, id: NodeId) -> &Node {
    &self.nodes[id.index()]
  }

  #[inline]
  pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
    &mut self.nodes[id.index()]
  }

  /// Number of nodes ever created, the root included.
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// All nodes in creation order.
  pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
    self
      .nodes
      .iter()
      .enumerate()
      .map(|(index, node)| (NodeId::from_index(index), node))
  }

  /// Height of the whole tree.
  pub fn height(&self) -> u32 {
    self.root_node().max_depth
  }

  /// Subdivide a leaf into 8 children and return them in octant order.
  ///
  /// Axis signs are iterated x-outer, y-middle, z-inner, which pushes the
  /// children in octant-digit order. The caller moves any stored point.
  pub(crate) fn make_children(&mut self, id: NodeId) -> [NodeId; OCTANT_COUNT] {
    debug_assert!(self.node(id).is_leaf(), "node is already subdivided");

    let first = self.nodes.len();
    for x in [false, true] {
      for y in [false, true] {
        for z in [false, true] {
          let child = self.node(id).new_child(id, octant_index(x, y, z));
          self.nodes.push(child);
        }
      }
    }

    let children: [NodeId; OCTANT_COUNT] =
      std::array::from_fn(|octant| NodeId::from_index(first + octant));
    self.node_mut(id).children = Some(children);

    tracing::trace!(uid = self.node(id).uid(), "subdivided node");

    // New children are leaves of height 0.
    self.raise_max_depth(id, 0);
    children
  }

  /// Record that a child of `id` now has subtree height `child_height`.
  ///
  /// Walks toward the root and stops at the first ancestor that does not
  /// grow, so every `max_depth` stays equal to its true subtree height.
  pub(crate) fn raise_max_depth(&mut self, id: NodeId, child_height: u32) {
    let mut current = Some(id);
    let mut child_height = child_height;

    while let Some(node_id) = current {
      let node = self.node_mut(node_id);
      if child_height < node.max_depth {
        break;
      }
      node.max_depth = child_height + 1;
      child_height = node.max_depth;
      current = node.parent;
    }
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
