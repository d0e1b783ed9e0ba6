//! Leaf enumeration - stored points and free leaves.
//!
//! Both walks visit every leaf below a start node and keep the ones a
//! filter accepts. In [`TraversalMode::Parallel`] each internal node spawns
//! one rayon task per child inside a single `rayon::scope`, so the call
//! returns only after the whole subtree is visited. Result order is then
//! unspecified. [`TraversalMode::Sequential`] walks depth-first in octant
//! order on the calling thread.

use glam::Vec3;

use super::{Node, NodeId, Octree};
use crate::threading::{LeafSink, TraversalMode};

impl Octree {
  /// Every point stored in the tree.
  pub fn points(&self) -> Vec<Vec3> {
    self.points_under(self.root())
  }

  /// Points stored in the subtree rooted at `id`.
  #[tracing::instrument(level = "trace", skip_all, name = "octree::points")]
  pub fn points_under(&self, id: NodeId) -> Vec<Vec3> {
    self.collect_leaves(id, |node| node.point)
  }

  /// Every leaf holding no point.
  pub fn free_spaces(&self) -> Vec<NodeId> {
    self.free_spaces_under(self.root())
  }

  /// Same as [`Octree::free_spaces`], returning uids.
  pub fn free_space_uids(&self) -> Vec<String> {
    self.collect_leaves(self.root(), |node| node.is_free().then(|| node.uid.clone()))
  }

  /// Free leaves in the subtree rooted at `id`.
  #[tracing::instrument(level = "trace", skip_all, name = "octree::free_spaces")]
  pub fn free_spaces_under(&self, id: NodeId) -> Vec<NodeId> {
    self.collect_leaves_with_id(id, |leaf, node| node.is_free().then_some(leaf))
  }

  /// Apply `visit` to every leaf below `start` and gather the `Some` results.
  pub fn collect_leaves<T, F>(&self, start: NodeId, visit: F) -> Vec<T>
  where
    T: Send,
    F: Fn(&Node) -> Option<T> + Sync,
  {
    self.collect_leaves_with_id(start, |_, node| visit(node))
  }

  fn collect_leaves_with_id<T, F>(&self, start: NodeId, visit: F) -> Vec<T>
  where
    T: Send,
    F: Fn(NodeId, &Node) -> Option<T> + Sync,
  {
    match self.config.traversal {
      TraversalMode::Sequential => {
        let mut out = Vec::new();
        self.walk(start, &visit, &mut out);
        out
      }
      TraversalMode::Parallel => {
        let sink = LeafSink::new();
        rayon::scope(|scope| fan_out(self, start, &visit, &sink, scope));
        sink.into_inner()
      }
    }
  }

  fn walk<T, F>(&self, id: NodeId, visit: &F, out: &mut Vec<T>)
  where
    F: Fn(NodeId, &Node) -> Option<T>,
  {
    let node = self.node(id);
    match node.children {
      Some(children) => {
        for child in children {
          self.walk(child, visit, out);
        }
      }
      None => out.extend(visit(id, node)),
    }
  }
}

fn fan_out<'s, T, F>(
  tree: &'s Octree,
  id: NodeId,
  visit: &'s F,
  sink: &'s LeafSink<T>,
  scope: &rayon::Scope<'s>,
) where
  T: Send,
  F: Fn(NodeId, &Node) -> Option<T> + Sync,
{
  let node = tree.node(id);
  match node.children {
    Some(children) => {
      for child in children {
        scope.spawn(move |scope| fan_out(tree, child, visit, sink, scope));
      }
    }
    None => {
      if let Some(item) = visit(id, node) {
        sink.push(item);
      }
    }
  }
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
