//! Octant addressing constants and index helpers.
//!
//! # Octant Encoding
//!
//! Children are created by iterating the axis signs x-outer, y-middle,
//! z-inner, each over {-1, +1}. The iteration counter is the octant digit:
//!
//! ```text
//! octant = 4·[x>0] + 2·[y>0] + [z>0]
//!
//!   digit │  x  y  z
//!   ──────┼─────────
//!     0   │  -  -  -
//!     1   │  -  -  +
//!     2   │  -  +  -
//!     3   │  -  +  +
//!     4   │  +  -  -
//!     5   │  +  -  +
//!     6   │  +  +  -
//!     7   │  +  +  +
//! ```
//!
//! A node's uid is the string of octant digits on the path from the root,
//! so the root is `""` and `uid.len()` is the node's depth.

/// Number of children of an internal node.
pub const OCTANT_COUNT: usize = 8;

/// Number of cube faces probed by a neighbor query.
pub const FACE_COUNT: usize = 6;

/// Child center offset from the parent center, as a fraction of the parent
/// edge length.
pub const CHILD_OFFSET_FACTOR: f32 = 0.25;

/// Distance a neighbor probe is pushed past a node face.
///
/// Must exceed the rounding error of halved centers and sizes while staying
/// well under the smallest node edge in use.
pub const DEFAULT_PROBE_EPSILON: f32 = 1e-4;

/// Default resolution floor used by [`crate::Octree::insert_default`].
pub const DEFAULT_MIN_SIZE: f32 = 1e-3;

/// Default root edge length.
pub const DEFAULT_ROOT_SIZE: f32 = 1.0;

/// Bit of the octant digit that marks the +X half.
pub const OCTANT_X_BIT: u8 = 0b100;
/// Bit of the octant digit that marks the +Y half.
pub const OCTANT_Y_BIT: u8 = 0b010;
/// Bit of the octant digit that marks the +Z half.
pub const OCTANT_Z_BIT: u8 = 0b001;

/// Octant digit for a sign pattern.
#[inline]
pub const fn octant_index(x_positive: bool, y_positive: bool, z_positive: bool) -> u8 {
  ((x_positive as u8) << 2) | ((y_positive as u8) << 1) | (z_positive as u8)
}

/// Per-axis signs (-1.0 or +1.0) of an octant digit.
#[inline]
pub fn octant_signs(octant: u8) -> [f32; 3] {
  let sign = |bit: u8| if octant & bit != 0 { 1.0 } else { -1.0 };
  [sign(OCTANT_X_BIT), sign(OCTANT_Y_BIT), sign(OCTANT_Z_BIT)]
}

/// Character appended to a parent uid for the given octant.
#[inline]
pub fn octant_digit(octant: u8) -> char {
  debug_assert!((octant as usize) < OCTANT_COUNT, "octant out of range");
  char::from(b'0' + octant)
}

/// Inverse of [`octant_digit`]. Returns `None` for anything but `'0'..='7'`.
#[inline]
pub fn digit_octant(digit: char) -> Option<u8> {
  match digit {
    '0'..='7' => Some(digit as u8 - b'0'),
    _ => None,
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
