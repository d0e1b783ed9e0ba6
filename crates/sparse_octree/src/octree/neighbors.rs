//! Neighbor engine - face-adjacent leaves of a node.
//!
//! For each of the six faces a probe point is placed just outside the face
//! (`size/2 + probe_epsilon` from the center), so it never sits on a shared
//! boundary. The probe is located in the tree at the query node's depth:
//!
//! ```text
//!          ┌───────┬───────┐
//!          │       │ a │ b │      query Q, probe P on Q's +X face
//!          │   Q  P│───┼───│      region R found at Q's depth
//!          │       │ c │ d │      harvest: leaves of R's -X half (a, c)
//!          └───────┴───────┘
//!                      R
//! ```
//!
//! If the region is a leaf it is the neighbor, free or not. Otherwise only the half of
//! the region facing the query node is walked, recursively, which yields
//! exactly the leaves touching that face.

use glam::Vec3;
use smallvec::SmallVec;

use super::{Direction, Node, NodeId, Octree};
use crate::constants::FACE_COUNT;

/// A point placed just outside one face of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
  pub point: Vec3,
  /// Face of the query node the probe sits behind.
  pub side: Direction,
  /// `side` for direct queries, `All` otherwise.
  pub tag: Direction,
}

/// A leaf returned by a neighbor query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
  pub node: NodeId,
  /// Face of the query node this leaf touches, `All` for non-direct queries.
  pub side: Direction,
}

/// Probes for all six faces of `node`, in [`Direction::FACES`] order.
pub fn face_probes(node: &Node, epsilon: f32, direct_only: bool) -> SmallVec<[Probe; FACE_COUNT]> {
  let reach = node.size * 0.5 + epsilon;
  Direction::FACES
    .into_iter()
    .map(|side| Probe {
      point: node.center + side.unit() * reach,
      side,
      tag: if direct_only { side } else { Direction::All },
    })
    .collect()
}

impl Octree {
  /// Leaves adjacent to `node` across its faces.
  ///
  /// With `direct_only` only the leaves actually touching each face are
  /// returned; without it every leaf of each adjacent region is. With
  /// `require_free` occupied leaves harvested from a subdivided region are
  /// dropped; a region that is itself a leaf is always returned. Results are
  /// concatenated across faces without deduplication.
  pub fn neighbors(&self, node: NodeId, require_free: bool, direct_only: bool) -> Vec<NodeId> {
    self
      .tagged_neighbors(node, require_free, direct_only)
      .into_iter()
      .map(|neighbor| neighbor.node)
      .collect()
  }

  /// Same as [`Octree::neighbors`], returning uids.
  pub fn neighbor_uids(&self, node: NodeId, require_free: bool, direct_only: bool) -> Vec<String> {
    self
      .tagged_neighbors(node, require_free, direct_only)
      .into_iter()
      .map(|neighbor| self.node(neighbor.node).uid.clone())
      .collect()
  }

  /// Same as [`Octree::neighbors`], tagging each leaf with the face it
  /// borders.
  ///
  /// A probe whose descent fails is logged and its face skipped.
  #[tracing::instrument(level = "trace", skip_all, name = "octree::neighbors", fields(node = ?node))]
  pub fn tagged_neighbors(
    &self,
    node: NodeId,
    require_free: bool,
    direct_only: bool,
  ) -> Vec<Neighbor> {
    let query = self.node(node);
    let root = self.root_node();
    let mut found = Vec::new();
    let mut leaves = Vec::new();

    for probe in face_probes(query, self.config.probe_epsilon, direct_only) {
      if !root.point_fits(probe.point) {
        continue;
      }

      let region = match self.find_fitting_child(self.root(), probe.point, query.depth()) {
        Ok(region) => region,
        Err(error) => {
          tracing::warn!(%error, uid = query.uid(), side = ?probe.side, "skipping neighbor probe");
          continue;
        }
      };

      leaves.clear();
      if self.node(region).is_leaf() {
        // A leaf region is the neighbor itself, occupied or not.
        leaves.push(region);
      } else {
        // The touching half of the region faces back toward the query node.
        self.harvest_face(region, probe.tag.opposite(), require_free, &mut leaves);
      }
      found.extend(leaves.iter().map(|&leaf| Neighbor {
        node: leaf,
        side: probe.tag,
      }));
    }

    found
  }

  fn harvest_face(&self, id: NodeId, half: Direction, require_free: bool, out: &mut Vec<NodeId>) {
    let node = self.node(id);
    match node.children {
      Some(children) => {
        for octant in half.octants() {
          self.harvest_face(children[octant as usize], half, require_free, out);
        }
      }
      None => {
        if !(require_free && node.point.is_some()) {
          out.push(id);
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
