//! Occupancy summary for an octree.

use super::Octree;

/// Node and leaf counts for a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
	/// Every node, internal and leaf.
	pub nodes: usize,
	/// Nodes without children.
	pub leaves: usize,
	/// Leaves holding no point.
	pub free_leaves: usize,
	/// Stored points (occupied leaves).
	pub points: usize,
	/// Height of the root subtree.
	pub height: u32,
}

impl TreeStats {
	/// Internal node count.
	#[inline]
	pub fn internal(&self) -> usize {
		self.nodes - self.leaves
	}

	/// Fraction of leaves that hold a point, 0 for a tree with no leaves.
	pub fn occupancy(&self) -> f32 {
		if self.leaves == 0 {
			return 0.0;
		}
		self.points as f32 / self.leaves as f32
	}
}

impl Octree {
	/// Count nodes, leaves and points in one pass over the arena.
	pub fn stats(&self) -> TreeStats {
		let mut stats = TreeStats {
			nodes: self.node_count(),
			height: self.height(),
			..Default::default()
		};
		for (_, node) in self.iter() {
			if !node.is_leaf() {
				continue;
			}
			stats.leaves += 1;
			match node.point {
				Some(_) => stats.points += 1,
				None => stats.free_leaves += 1,
			}
		}
		stats
	}
}
