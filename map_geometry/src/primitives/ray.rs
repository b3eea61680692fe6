/// Ray — origin + direction, used for picking.
///
/// The direction does not need to be normalized. Plane queries treat the
/// ray as an infinite line; sphere queries never step behind the origin.

use glam::Vec3;
use crate::error::{self, Error, Result};

/// Below this `|dot(normal, dir)|` a ray counts as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Outcome of [`Ray::closest_point_on_sphere`].
///
/// Every point is relative to the sphere center, not world-absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SphereContact {
    /// The ray hits the sphere ahead of its origin: nearest intersection point.
    Intersection(Vec3),
    /// No forward hit: the point on the sphere closest to the ray
    /// (or to the ray origin when the sphere lies behind it).
    Nearest(Vec3),
    /// Ray origin sits on the center, or the radius is zero.
    Undefined,
}

impl SphereContact {
    /// Center-relative point. `Undefined` yields the zero vector.
    pub fn point(&self) -> Vec3 {
        match *self {
            SphereContact::Intersection(p) | SphereContact::Nearest(p) => p,
            SphereContact::Undefined => Vec3::ZERO,
        }
    }

    /// `true` only for an exact forward intersection.
    pub fn is_intersection(&self) -> bool {
        matches!(self, SphereContact::Intersection(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub pos: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Self { pos, dir }
    }

    /// Checked constructor: the direction must be finite and non-zero.
    pub fn try_new(pos: Vec3, dir: Vec3) -> Result<Self> {
        if !pos.is_finite() || !dir.is_finite() {
            return Err(error::log_and_return(
                "geo::Ray",
                Error::InvalidRay(format!("non-finite ray pos {} dir {}", pos, dir)),
            ));
        }
        if dir.length_squared() <= 0.0 {
            return Err(error::log_and_return(
                "geo::Ray",
                Error::InvalidRay("zero-length direction".to_string()),
            ));
        }
        Ok(Self { pos, dir })
    }

    /// `pos + t * dir`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.pos + self.dir * t
    }

    /// Intersect with the plane through `point` with unit `normal`.
    ///
    /// Returns `None` only when the ray is parallel to the plane. Hits
    /// behind the origin (negative `t`) are returned as well; callers
    /// that need a forward-only test must check the side themselves.
    pub fn intersects_plane(&self, point: Vec3, normal: Vec3) -> Option<Vec3> {
        let d = normal.dot(self.dir);
        if d.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (point - self.pos).dot(normal) / d;
        Some(self.point_at(t))
    }

    /// Closest point on a sphere, relative to `center`.
    ///
    /// - Forward hit → `Intersection` with the nearer root.
    /// - Miss → `Nearest`: the point on the ray closest to the center
    ///   (never behind the origin) pushed onto the sphere surface.
    /// - Sphere entirely behind the origin → `Nearest`: the sphere point
    ///   facing the ray origin.
    ///
    /// Preconditions (debug-checked): `dir` is non-zero and `r >= 0`.
    pub fn closest_point_on_sphere(&self, center: Vec3, r: f32) -> SphereContact {
        debug_assert!(self.dir.length_squared() > 0.0, "ray direction must be non-zero");
        debug_assert!(r >= 0.0, "sphere radius must be non-negative");

        if self.pos == center || r == 0.0 {
            return SphereContact::Undefined;
        }

        let center_to_p = self.pos - center;
        let a = self.dir.dot(self.dir);
        let b = 2.0 * center_to_p.dot(self.dir);
        let c = center_to_p.dot(center_to_p) - r * r;
        let d = b * b - 4.0 * a * c;

        if d < 0.0 {
            // Projection of -center_to_p onto dir, clamped to the forward half
            let t = (-b / (2.0 * a)).max(0.0);
            let point_on_ray = self.point_at(t);
            let to_center = center - point_on_ray;
            let scaled = to_center * (1.0 - r / to_center.length());
            return SphereContact::Nearest(point_on_ray + scaled - center);
        }

        debug_assert!(a > 0.0);
        let t = (-b - d.sqrt()) / (2.0 * a);
        if t < 0.0 {
            let nearest = center_to_p * (r / center_to_p.length());
            SphereContact::Nearest(nearest)
        } else {
            SphereContact::Intersection(self.point_at(t) - center)
        }
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
