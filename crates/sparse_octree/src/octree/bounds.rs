//! Closed axis-aligned cube bounds.

use glam::Vec3;

/// Closed axis-aligned box.
///
/// Both faces are inclusive, so a point on a face shared by two siblings is
/// contained by both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeBounds {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl CubeBounds {
	/// Create bounds from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"bounds min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Create the cube with the given centroid and full edge length.
	pub fn from_center_size(center: Vec3, size: f32) -> Self {
		let half = Vec3::splat(size * 0.5);
		Self::new(center - half, center + half)
	}

	/// Check if the bounds contain a point, faces included.
	///
	/// NaN coordinates are never contained.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Check if `other` lies entirely inside these bounds.
	#[inline]
	pub fn contains_bounds(&self, other: &CubeBounds) -> bool {
		self.contains_point(other.min) && self.contains_point(other.max)
	}
}
