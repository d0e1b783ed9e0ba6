//! sparse_octree - Sparse, lazily subdividing octree over 3D points
//!
//! Points are stored one per leaf. A leaf splits into 8 octants only when a
//! second point arrives, down to a caller-supplied resolution floor, so the
//! tree stays shallow wherever the data is sparse.
//!
//! # Features
//!
//! - **Lazy insertion**: occupied leaves split on collision and the held
//!   point moves down; duplicates and floor violations are rejected
//! - **Face neighbors**: leaves adjacent to a node across each of its six
//!   faces, optionally restricted to leaves touching the face or to free
//!   leaves
//! - **Parallel enumeration**: stored points and free leaves gathered with
//!   rayon fork-join
//! - **Uid addressing**: every node is reachable by its octant-digit path
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use sparse_octree::{Direction, Octree};
//!
//! let mut tree = Octree::new(Vec3::ZERO, 8.0);
//! let inserted = tree.insert(Vec3::ONE, 1.0)?;
//! assert_eq!(tree.node(inserted.home).uid(), "7");
//!
//! tree.insert(Vec3::splat(-3.0), 1.0)?;
//! for neighbor in tree.tagged_neighbors(inserted.home, true, true) {
//!     println!("{} across {:?}", tree.node(neighbor.node).uid(), neighbor.side);
//! }
//!
//! println!("{} free leaves", tree.free_spaces().len());
//! ```

pub mod constants;
pub mod error;
pub mod octree;
pub mod threading;

// Re-export commonly used items
pub use constants::{octant_digit, octant_index, FACE_COUNT, OCTANT_COUNT};
pub use error::OctreeError;
pub use octree::{
  CubeBounds, Direction, InsertFailure, Inserted, InvariantViolation, Neighbor, Node, NodeId,
  Octree, OctreeConfig, TreeStats,
};
pub use threading::TraversalMode;
