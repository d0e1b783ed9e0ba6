//! Point lookups - containment, uid resolution and probe descent.

use glam::Vec3;

use super::{NodeId, Octree};
use crate::OctreeError;

impl Octree {
  /// Check if the exact coordinate is stored anywhere in the tree.
  ///
  /// Compares component-wise with no epsilon and follows the same
  /// first-fitting-child route as insertion.
  pub fn point_already_in_tree(&self, point: Vec3) -> bool {
    let mut current = self.root();
    loop {
      let node = self.node(current);
      if node.point == Some(point) {
        return true;
      }
      let next = node.children.and_then(|children| {
        children
          .into_iter()
          .find(|&child| self.node(child).point_fits(point))
      });
      match next {
        Some(child) => current = child,
        None => return false,
      }
    }
  }

  /// Resolve a uid (octant-digit path) to its node.
  ///
  /// Descends into the child whose uid is a prefix of `uid` one level
  /// deeper than the current node.
  pub fn node_with_uid(&self, uid: &str) -> Result<NodeId, OctreeError> {
    let not_found = || OctreeError::NoFittingNode {
      uid: uid.to_owned(),
    };

    let mut current = self.root();
    loop {
      let node = self.node(current);
      if node.uid == uid {
        return Ok(current);
      }
      if node.uid.len() >= uid.len() {
        return Err(not_found());
      }
      current = node
        .children
        .and_then(|children| {
          children
            .into_iter()
            .find(|&child| uid.starts_with(self.node(child).uid()))
        })
        .ok_or_else(not_found)?;
    }
  }

  /// Descend from `start` toward `probe`, stopping at `target_depth` or at a
  /// leaf, whichever comes first.
  ///
  /// Fails with `NoFittingChild` if an internal node has no child whose
  /// bounds contain the probe.
  pub fn find_fitting_child(
    &self,
    start: NodeId,
    probe: Vec3,
    target_depth: usize,
  ) -> Result<NodeId, OctreeError> {
    let mut current = start;
    loop {
      let node = self.node(current);
      if node.depth() == target_depth {
        return Ok(current);
      }
      let Some(children) = node.children else {
        return Ok(current);
      };
      current = children
        .into_iter()
        .find(|&child| self.node(child).point_fits(probe))
        .ok_or(OctreeError::NoFittingChild {
          probe,
          depth: node.depth(),
        })?;
    }
  }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
