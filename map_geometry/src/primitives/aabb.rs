/// Axis-aligned bounding box for tile culling.
///
/// Value type: `quadrant` returns a new child instead of mutating the
/// parent. `center` is cached at construction.

use glam::Vec3;
use crate::error::{self, Error, Result};
use super::frustum::Frustum;

/// Result of a 3-way frustum/AABB classification.
///
/// Used by tile/quadtree traversal:
/// - `Outside` → skip the entire subtree
/// - `Partial` → test children
/// - `Inside` → accept the subtree without further testing
///
/// The discriminants (0, 1, 2) are part of the contract with callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside = 0,
    /// AABB partially overlaps the frustum
    Partial = 1,
    /// AABB is entirely inside the frustum
    Inside = 2,
}

impl FrustumTest {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// `true` for `Partial` and `Inside`.
    pub fn is_visible(self) -> bool {
        self != FrustumTest::Outside
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
    /// (min + max) / 2
    pub center: Vec3,
}

impl Aabb {
    /// Create a box from its corners. `min <= max` component-wise is a
    /// debug-checked precondition.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.cmple(max).all(), "aabb min must not exceed max");
        Self {
            min,
            max,
            center: (min + max) * 0.5,
        }
    }

    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// `Error::InvalidBounds` if a corner is not finite or `min > max` on any axis.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(error::log_and_return(
                "geo::Aabb",
                Error::InvalidBounds(format!("non-finite corners {} {}", min, max)),
            ));
        }
        if !min.cmple(max).all() {
            return Err(error::log_and_return(
                "geo::Aabb",
                Error::InvalidBounds(format!("min {} exceeds max {}", min, max)),
            ));
        }
        Ok(Self::new(min, max))
    }

    /// Tight box around a set of points, `None` when the set is empty.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min, max))
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Child box for 2D (x, y) subdivision; z extent is kept as is.
    ///
    /// Even indices take the low-x half, indices 0 and 1 take the low-y
    /// half: 0 = (lo, lo), 1 = (hi, lo), 2 = (lo, hi), 3 = (hi, hi).
    pub fn quadrant(&self, index: usize) -> Aabb {
        debug_assert!(index < 4, "quadrant index out of range");
        let low_x = index % 2 == 0;
        let low_y = index < 2;

        let mut q_min = self.min;
        let mut q_max = self.max;

        q_min.x = if low_x { self.min.x } else { self.center.x };
        q_max.x = if low_x { self.center.x } else { self.max.x };
        q_min.y = if low_y { self.min.y } else { self.center.y };
        q_max.y = if low_y { self.center.y } else { self.max.y };

        Aabb::new(q_min, q_max)
    }

    /// `clamp(point.x) - point.x` along x; zero inside the slab.
    pub fn distance_x(&self, point: Vec3) -> f32 {
        point.x.clamp(self.min.x, self.max.x) - point.x
    }

    /// `clamp(point.y) - point.y` along y; zero inside the slab.
    pub fn distance_y(&self, point: Vec3) -> f32 {
        point.y.clamp(self.min.y, self.max.y) - point.y
    }

    /// `clamp(point.z) - point.z` along z; zero inside the slab.
    pub fn distance_z(&self, point: Vec3) -> f32 {
        point.z.clamp(self.min.z, self.max.z) - point.z
    }

    /// All three per-axis distances at once.
    pub fn distance(&self, point: Vec3) -> Vec3 {
        self.closest_point(point) - point
    }

    /// Point of the box nearest to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// The eight corners: min.z face then max.z face, each
    /// (min.x, min.y), (max.x, min.y), (max.x, max.y), (min.x, max.y).
    pub fn corners(&self) -> [Vec3; 8] {
        let (mn, mx) = (self.min, self.max);
        [
            Vec3::new(mn.x, mn.y, mn.z),
            Vec3::new(mx.x, mn.y, mn.z),
            Vec3::new(mx.x, mx.y, mn.z),
            Vec3::new(mn.x, mx.y, mn.z),
            Vec3::new(mn.x, mn.y, mx.z),
            Vec3::new(mx.x, mn.y, mx.z),
            Vec3::new(mx.x, mx.y, mx.z),
            Vec3::new(mn.x, mx.y, mx.z),
        ]
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        self.min.cmple(p).all() && p.cmple(self.max).all()
    }

    /// Test if this box overlaps or touches another.
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// Smallest box containing both.
    pub fn encapsulate(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Classify against a frustum (separating-axis test).
    ///
    /// First the six frustum planes: a plane with no box corner on its
    /// inner side separates them (`Outside`); all corners inside all
    /// planes means `Inside`. Otherwise the frustum corners are projected
    /// on the three world axes, which catches boxes that straddle planes
    /// but still miss the frustum. No separating axis → `Partial`.
    pub fn intersects(&self, frustum: &Frustum) -> FrustumTest {
        let corners = self.corners();
        let mut fully_inside = true;

        for plane in &frustum.planes {
            let normal = plane.truncate();
            let points_inside = corners
                .iter()
                .filter(|corner| normal.dot(**corner) + plane.w >= 0.0)
                .count();

            if points_inside == 0 {
                return FrustumTest::Outside;
            }
            if points_inside != corners.len() {
                fully_inside = false;
            }
        }

        if fully_inside {
            return FrustumTest::Inside;
        }

        for axis in 0..3 {
            let extent = self.max[axis] - self.min[axis];
            let mut proj_min = f32::MAX;
            let mut proj_max = -f32::MAX;

            for point in &frustum.points {
                let projected = point[axis] - self.min[axis];
                proj_min = proj_min.min(projected);
                proj_max = proj_max.max(projected);
            }

            if proj_max < 0.0 || proj_min > extent {
                return FrustumTest::Outside;
            }
        }

        FrustumTest::Partial
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
