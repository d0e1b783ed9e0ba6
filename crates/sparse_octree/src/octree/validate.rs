//! Structural self-check.
//!
//! Recomputes everything the insertion engine maintains incrementally and
//! compares: containment, leaf/internal exclusivity, parent and uid links,
//! child geometry and subtree heights.

use thiserror::Error;

use super::{NodeId, Octree};
use crate::constants::octant_digit;

/// First broken structural rule found by [`Octree::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
  #[error("node {uid:?} stores a point outside its bounds")]
  PointOutsideBounds { uid: String },

  #[error("internal node {uid:?} stores a point")]
  InternalNodeHoldsPoint { uid: String },

  #[error("node {uid:?} records max depth {recorded}, actual subtree height is {actual}")]
  DepthMismatch {
    uid: String,
    recorded: u32,
    actual: u32,
  },

  #[error("node {uid:?} has a parent or uid that does not match its position")]
  BrokenLink { uid: String },

  #[error("node {uid:?} does not have the size or center of its octant")]
  ChildGeometry { uid: String },
}

impl Octree {
  /// Check every structural invariant, returning the first violation.
  pub fn validate(&self) -> Result<(), InvariantViolation> {
    if self.root_node().parent.is_some() || !self.root_node().uid.is_empty() {
      return Err(InvariantViolation::BrokenLink {
        uid: self.root_node().uid.clone(),
      });
    }
    self.validate_subtree(self.root()).map(|_| ())
  }

  /// Returns the subtree height of `id`.
  fn validate_subtree(&self, id: NodeId) -> Result<u32, InvariantViolation> {
    let node = self.node(id);

    let actual = match node.children {
      None => {
        if let Some(point) = node.point {
          if !node.point_fits(point) {
            return Err(InvariantViolation::PointOutsideBounds {
              uid: node.uid.clone(),
            });
          }
        }
        0
      }
      Some(children) => {
        if node.point.is_some() {
          return Err(InvariantViolation::InternalNodeHoldsPoint {
            uid: node.uid.clone(),
          });
        }

        let mut tallest = 0;
        for (octant, child_id) in (0u8..).zip(children) {
          let child = self.node(child_id);

          let uid_ok = child.uid.len() == node.uid.len() + 1
            && child.uid.starts_with(node.uid.as_str())
            && child.uid.ends_with(octant_digit(octant));
          if child.parent != Some(id) || !uid_ok {
            return Err(InvariantViolation::BrokenLink {
              uid: child.uid.clone(),
            });
          }
          let expected_size = self.config.node_size_at_depth(child.depth() as u32);
          if child.size != expected_size || child.center != node.child_center(octant) {
            return Err(InvariantViolation::ChildGeometry {
              uid: child.uid.clone(),
            });
          }

          tallest = tallest.max(self.validate_subtree(child_id)?);
        }
        tallest + 1
      }
    };

    if node.max_depth != actual {
      return Err(InvariantViolation::DepthMismatch {
        uid: node.uid.clone(),
        recorded: node.max_depth,
        actual,
      });
    }
    Ok(actual)
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use super::*;

  fn sample_tree() -> Octree {
    let mut tree = Octree::new(Vec3::ZERO, 8.0);
    for point in [Vec3::ONE, Vec3::splat(3.0), Vec3::splat(-3.0)] {
      tree.insert(point, 1.0).unwrap();
    }
    tree
  }

  #[test]
  fn test_valid_trees() {
    assert_eq!(Octree::new(Vec3::ZERO, 8.0).validate(), Ok(()));
    assert_eq!(sample_tree().validate(), Ok(()));
  }

  #[test]
  fn test_detects_depth_mismatch() {
    let mut tree = sample_tree();
    tree.nodes[0].max_depth = 5;
    assert_eq!(
      tree.validate(),
      Err(InvariantViolation::DepthMismatch {
        uid: String::new(),
        recorded: 5,
        actual: 2,
      })
    );
  }

  #[test]
  fn test_detects_internal_point() {
    let mut tree = sample_tree();
    let corner = tree.node_with_uid("7").unwrap();
    tree.node_mut(corner).point = Some(Vec3::splat(2.0));
    assert_eq!(
      tree.validate(),
      Err(InvariantViolation::InternalNodeHoldsPoint { uid: "7".into() })
    );
  }

  #[test]
  fn test_detects_point_outside_bounds() {
    let mut tree = sample_tree();
    let leaf = tree.node_with_uid("1").unwrap();
    tree.node_mut(leaf).point = Some(Vec3::splat(3.0));
    assert_eq!(
      tree.validate(),
      Err(InvariantViolation::PointOutsideBounds { uid: "1".into() })
    );
  }

  #[test]
  fn test_detects_broken_parent_link() {
    let mut tree = sample_tree();
    let leaf = tree.node_with_uid("2").unwrap();
    tree.node_mut(leaf).parent = Some(leaf);
    assert_eq!(
      tree.validate(),
      Err(InvariantViolation::BrokenLink { uid: "2".into() })
    );
  }

  /// A child whose edge does not match its level is caught even when its
  /// center is right.
  #[test]
  fn test_detects_wrong_child_size() {
    let mut tree = sample_tree();
    let leaf = tree.node_with_uid("71").unwrap();
    tree.node_mut(leaf).size = 1.0;
    assert_eq!(
      tree.validate(),
      Err(InvariantViolation::ChildGeometry { uid: "71".into() })
    );
  }

  #[test]
  fn test_detects_bad_geometry() {
    let mut tree = sample_tree();
    let leaf = tree.node_with_uid("4").unwrap();
    tree.node_mut(leaf).center += Vec3::X;
    assert_eq!(
      tree.validate(),
      Err(InvariantViolation::ChildGeometry { uid: "4".into() })
    );
  }
}
