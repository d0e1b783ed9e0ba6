use super::*;

// =========================================================================
// Octant encoding
// =========================================================================

/// The nested x-outer, y-middle, z-inner loop counter must match the
/// bit encoding for every octant.
#[test]
fn test_octant_index_matches_iteration_order() {
  let mut counter = 0u8;
  for x in [false, true] {
    for y in [false, true] {
      for z in [false, true] {
        assert_eq!(
          octant_index(x, y, z),
          counter,
          "Sign pattern ({}, {}, {}) should be octant {}",
          x,
          y,
          z,
          counter
        );
        counter += 1;
      }
    }
  }
  assert_eq!(counter as usize, OCTANT_COUNT);
}

/// Octant 0 is all-negative, octant 7 all-positive.
#[test]
fn test_octant_signs_extremes() {
  assert_eq!(octant_signs(0), [-1.0, -1.0, -1.0]);
  assert_eq!(octant_signs(7), [1.0, 1.0, 1.0]);
  assert_eq!(octant_signs(4), [1.0, -1.0, -1.0], "Octant 4 is +x -y -z");
  assert_eq!(octant_signs(3), [-1.0, 1.0, 1.0], "Octant 3 is -x +y +z");
}

/// signs -> index -> signs is stable for all octants.
#[test]
fn test_octant_signs_roundtrip() {
  for octant in 0..OCTANT_COUNT as u8 {
    let [x, y, z] = octant_signs(octant);
    assert_eq!(octant_index(x > 0.0, y > 0.0, z > 0.0), octant);
  }
}

#[test]
fn test_digit_conversion() {
  for octant in 0..OCTANT_COUNT as u8 {
    let digit = octant_digit(octant);
    assert_eq!(digit_octant(digit), Some(octant));
  }
  assert_eq!(octant_digit(5), '5');
  assert_eq!(digit_octant('8'), None);
  assert_eq!(digit_octant('a'), None);
}

/// The probe epsilon has to stay far below the default floor, otherwise
/// probes could skip over a whole minimum-size node.
#[test]
fn test_probe_epsilon_below_min_size() {
  assert!(DEFAULT_PROBE_EPSILON > 0.0);
  assert!(DEFAULT_PROBE_EPSILON * 2.0 < DEFAULT_MIN_SIZE);
}
