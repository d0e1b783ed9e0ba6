//! Sparse octree over 3D points.
//!
//! Space is subdivided lazily: a region splits into 8 octants only when a
//! second point lands in it, so each leaf holds at most one point.
//!
//! # Octant convention
//!
//! Children are indexed by digit `4·[x>0] + 2·[y>0] + [z>0]` relative to the
//! parent center. A node's uid is the string of digits on the path from the
//! root (the root is `""`).
//!
//! ```text
//!   z- layer        z+ layer         (+x right, +y up)
//!   ┌───┬───┐       ┌───┬───┐
//!   │ 2 │ 6 │       │ 3 │ 7 │
//!   ├───┼───┤       ├───┼───┤
//!   │ 0 │ 4 │       │ 1 │ 5 │
//!   └───┴───┘       └───┴───┘
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `Node`, `NodeId` - arena entries and handles
//! - [`tree`]: `Octree` - the arena, subdivision and depth bookkeeping
//! - [`insert`]: lazy-subdivision insertion
//! - [`query`]: containment, uid lookup, probe descent
//! - [`neighbors`]: face-adjacent leaves
//! - [`traversal`]: point and free-leaf enumeration
//! - [`stats`], [`validate`]: summaries and self-checks

pub mod bounds;
pub mod config;
pub mod direction;
pub mod insert;
pub mod neighbors;
pub mod node;
pub mod query;
pub mod stats;
pub mod traversal;
pub mod tree;
pub mod validate;

// Re-exports
pub use bounds::CubeBounds;
pub use config::OctreeConfig;
pub use direction::Direction;
pub use insert::{InsertFailure, Inserted};
pub use neighbors::{face_probes, Neighbor, Probe};
pub use node::{Node, NodeId};
pub use stats::TreeStats;
pub use tree::Octree;
pub use validate::InvariantViolation;
