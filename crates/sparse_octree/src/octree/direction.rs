//! Direction - the six cube faces plus a wildcard.
//!
//! Each direction maps to a fixed mask over the 8 octant digits selecting
//! the half of a node that lies on that side:
//!
//! ```text
//! NegX → {0,1,2,3}   PosX → {4,5,6,7}
//! NegY → {0,1,4,5}   PosY → {2,3,6,7}
//! NegZ → {0,2,4,6}   PosZ → {1,3,5,7}
//! All  → {0..7}
//! ```

use glam::Vec3;

use crate::constants::FACE_COUNT;

/// Axis-aligned direction, or `All` for "no face restriction".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
  NegX,
  PosX,
  NegY,
  PosY,
  NegZ,
  PosZ,
  All,
}

/// Octant bitmask per direction, indexed by `Direction as usize`.
/// Bit `i` set means octant digit `i` lies on that side.
const OCTANT_MASKS: [u8; 7] = [
  0b0000_1111, // NegX
  0b1111_0000, // PosX
  0b0011_0011, // NegY
  0b1100_1100, // PosY
  0b0101_0101, // NegZ
  0b1010_1010, // PosZ
  0b1111_1111, // All
];

impl Direction {
  /// The six faces in probe order: axis x, y, z; minus before plus.
  pub const FACES: [Direction; FACE_COUNT] = [
    Direction::NegX,
    Direction::PosX,
    Direction::NegY,
    Direction::PosY,
    Direction::NegZ,
    Direction::PosZ,
  ];

  /// Face on the other side of the same axis. `All` maps to itself.
  pub fn opposite(self) -> Self {
    match self {
      Self::NegX => Self::PosX,
      Self::PosX => Self::NegX,
      Self::NegY => Self::PosY,
      Self::PosY => Self::NegY,
      Self::NegZ => Self::PosZ,
      Self::PosZ => Self::NegZ,
      Self::All => Self::All,
    }
  }

  /// Unit vector pointing out of the face. `All` is zero.
  pub fn unit(self) -> Vec3 {
    match self {
      Self::NegX => Vec3::NEG_X,
      Self::PosX => Vec3::X,
      Self::NegY => Vec3::NEG_Y,
      Self::PosY => Vec3::Y,
      Self::NegZ => Vec3::NEG_Z,
      Self::PosZ => Vec3::Z,
      Self::All => Vec3::ZERO,
    }
  }

  /// Mask over octant digits on this side.
  #[inline]
  pub fn octant_mask(self) -> u8 {
    OCTANT_MASKS[self as usize]
  }

  /// Check if octant digit `octant` lies on this side.
  #[inline]
  pub fn includes_octant(self, octant: u8) -> bool {
    self.octant_mask() & (1 << octant) != 0
  }

  /// Octant digits on this side, ascending.
  pub fn octants(self) -> impl Iterator<Item = u8> {
    (0..8u8).filter(move |&octant| self.includes_octant(octant))
  }
}

#[cfg(test)]
#[path = "direction_test.rs"]
mod direction_test;
