//! Insertion engine - lazy subdivision on collision.
//!
//! A point descends to the first free leaf on its path. When it meets an
//! occupied leaf, that leaf splits into 8 children and its point moves down
//! into the matching child before the descent continues. Subdivision stops
//! at the caller's `min_size` floor.
//!
//! # Descent rules
//!
//! 1. Free leaf: this is the new home.
//! 2. Leaf holding an equal point: `AlreadyInTree`.
//! 3. Node smaller than `min_size`: `TooSmall`.
//! 4. Occupied leaf: split unless the children would be below `min_size`
//!    (`TooSmall`, nothing created), then re-home the held point.
//! 5. Continue into the first child (octant order) containing the point.
//! 6. No such child: `NoFreeSpace`.
//!
//! Nodes created along the way are reported whether or not the insertion
//! succeeds. Subdivision is never rolled back.

use glam::Vec3;
use thiserror::Error;

use super::{NodeId, Octree};
use crate::OctreeError;

/// Successful insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inserted {
  /// Leaf that now stores the point.
  pub home: NodeId,
  /// Every node materialized by this call, in creation order.
  pub created: Vec<NodeId>,
}

/// Rejected insertion, with whatever was subdivided before the rejection.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("insertion rejected: {error}")]
pub struct InsertFailure {
  #[source]
  pub error: OctreeError,
  /// Nodes created before the failure was detected.
  pub created: Vec<NodeId>,
}

impl Octree {
  /// Insert `point`, never splitting a region into children smaller than
  /// `min_size`.
  #[tracing::instrument(level = "trace", skip_all, name = "octree::insert", fields(point = ?point))]
  pub fn insert(&mut self, point: Vec3, min_size: f32) -> Result<Inserted, InsertFailure> {
    let mut created = Vec::new();

    match self.place(point, min_size, &mut created) {
      Ok(home) => Ok(Inserted { home, created }),
      Err(error) => {
        if error.is_invariant_violation() {
          tracing::warn!(%error, ?point, "octree invariant violated during insert");
        } else if self.config.verbose {
          tracing::debug!(%error, ?point, "insert rejected");
        }
        Err(InsertFailure { error, created })
      }
    }
  }

  /// Insert using the configured `min_size`.
  pub fn insert_default(&mut self, point: Vec3) -> Result<Inserted, InsertFailure> {
    let min_size = self.config.min_size;
    self.insert(point, min_size)
  }

  fn place(
    &mut self,
    point: Vec3,
    min_size: f32,
    created: &mut Vec<NodeId>,
  ) -> Result<NodeId, OctreeError> {
    let root = self.root();
    if !self.config.root_bounds().contains_point(point) {
      return Err(OctreeError::OutOfBounds { point });
    }

    // The root only stores a point when it is too small to split.
    let root_node = self.root_node();
    if root_node.is_free() && root_node.size * 0.5 >= min_size {
      created.extend(self.make_children(root));
    }

    let home = self.find_free_space(root, point, min_size, created)?;
    self.node_mut(home).point = Some(point);
    Ok(home)
  }

  fn find_free_space(
    &mut self,
    id: NodeId,
    point: Vec3,
    min_size: f32,
    created: &mut Vec<NodeId>,
  ) -> Result<NodeId, OctreeError> {
    let node = self.node(id);
    if node.is_free() {
      return Ok(id);
    }
    if node.point == Some(point) {
      return Err(OctreeError::AlreadyInTree);
    }
    if node.size < min_size {
      return Err(OctreeError::TooSmall {
        size: node.size,
        min_size,
      });
    }

    if node.is_leaf() {
      let child_size = node.size * 0.5;
      if child_size < min_size {
        return Err(OctreeError::TooSmall {
          size: child_size,
          min_size,
        });
      }

      created.extend(self.make_children(id));

      // Points only live in leaves, so the held point moves down.
      if let Some(held) = self.node_mut(id).point.take() {
        let new_home = self
          .find_free_space(id, held, min_size, created)
          .map_err(|_| OctreeError::NewHomeNil {
            uid: self.node(id).uid.clone(),
          })?;
        self.node_mut(new_home).point = Some(held);
      }
    }

    let node = self.node(id);
    let next = node
      .children
      .and_then(|children| {
        children
          .into_iter()
          .find(|&child| self.node(child).point_fits(point))
      })
      .ok_or_else(|| OctreeError::NoFreeSpace {
        uid: node.uid.clone(),
      })?;

    self.find_free_space(next, point, min_size, created)
  }
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod insert_test;
