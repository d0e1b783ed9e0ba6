use super::*;

// =========================================================================
// Containment
// =========================================================================

fn populated() -> Octree {
  let mut tree = Octree::new(Vec3::ZERO, 8.0);
  for point in [
    Vec3::ONE,
    Vec3::splat(3.0),
    Vec3::splat(-3.0),
    Vec3::new(-1.0, 2.5, 0.5),
  ] {
    tree.insert(point, 0.5).unwrap();
  }
  tree
}

#[test]
fn test_contains_inserted_points() {
  let tree = populated();
  assert!(tree.point_already_in_tree(Vec3::ONE));
  assert!(tree.point_already_in_tree(Vec3::splat(3.0)));
  assert!(tree.point_already_in_tree(Vec3::splat(-3.0)));
  assert!(tree.point_already_in_tree(Vec3::new(-1.0, 2.5, 0.5)));
}

/// Equality is exact: a nearby coordinate is a miss.
#[test]
fn test_exact_match_only() {
  let tree = populated();
  assert!(!tree.point_already_in_tree(Vec3::new(1.0, 1.0, 1.0001)));
  assert!(!tree.point_already_in_tree(Vec3::splat(2.0)));
}

#[test]
fn test_empty_and_outside() {
  let tree = Octree::new(Vec3::ZERO, 8.0);
  assert!(!tree.point_already_in_tree(Vec3::ZERO));

  let tree = populated();
  assert!(!tree.point_already_in_tree(Vec3::splat(100.0)));
}

// =========================================================================
// Uid resolution
// =========================================================================

#[test]
fn test_node_with_uid_root() {
  let tree = populated();
  assert_eq!(tree.node_with_uid(""), Ok(tree.root()));
}

#[test]
fn test_node_with_uid_descends() {
  let tree = populated();
  for (id, node) in tree.iter() {
    assert_eq!(
      tree.node_with_uid(node.uid()),
      Ok(id),
      "uid {:?} should resolve to its node",
      node.uid()
    );
  }
}

/// A path that runs past a leaf, or uses a non-octant digit, is not found.
#[test]
fn test_node_with_uid_missing() {
  let tree = populated();

  let leaf_uid = tree.node(tree.node_with_uid("0").unwrap()).uid().to_owned();
  assert!(tree.node(tree.node_with_uid(&leaf_uid).unwrap()).is_leaf());

  assert_eq!(
    tree.node_with_uid("05"),
    Err(OctreeError::NoFittingNode { uid: "05".into() })
  );
  assert!(tree.node_with_uid("9").is_err());
  assert!(tree.node_with_uid("7x").is_err());
}

// =========================================================================
// Probe descent
// =========================================================================

/// Stops at the requested depth even when the region is subdivided further.
#[test]
fn test_find_fitting_child_stops_at_depth() {
  let tree = populated();
  let found = tree
    .find_fitting_child(tree.root(), Vec3::splat(1.5), 1)
    .unwrap();
  assert_eq!(tree.node(found).uid(), "7");
  assert!(!tree.node(found).is_leaf());
}

/// Stops early at a leaf shallower than the requested depth.
#[test]
fn test_find_fitting_child_stops_at_leaf() {
  let tree = populated();
  let found = tree
    .find_fitting_child(tree.root(), Vec3::new(-2.0, -2.0, 2.0), 5)
    .unwrap();
  assert_eq!(tree.node(found).uid(), "1");
}

/// Depth 0 returns the start node unchanged.
#[test]
fn test_find_fitting_child_depth_zero() {
  let tree = populated();
  assert_eq!(
    tree.find_fitting_child(tree.root(), Vec3::ZERO, 0),
    Ok(tree.root())
  );
}

#[test]
fn test_find_fitting_child_outside_fails() {
  let tree = populated();
  let probe = Vec3::new(9.0, 0.0, 0.0);
  assert_eq!(
    tree.find_fitting_child(tree.root(), probe, 2),
    Err(OctreeError::NoFittingChild { probe, depth: 0 })
  );
}
