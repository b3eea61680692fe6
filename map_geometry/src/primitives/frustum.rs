/// Frustum — six inward planes and eight corners of a camera view volume.
///
/// Each plane is a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the unit, inward-pointing normal
/// - D is the offset
/// - A point P is inside if dot((A, B, C), P) + D >= 0 for all planes
///
/// Corners are kept next to the planes because the box test in
/// `Aabb::intersects` projects them onto the world axes.
///
/// Built once per frame from the inverse of the rendering projection.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{self, Error, Result};

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_BOTTOM: usize = 4;
pub const PLANE_TOP: usize = 5;

/// Clip-space cube corners: near face (z = -1) then far face (z = +1),
/// each top-left, top-right, bottom-right, bottom-left.
pub const CLIP_SPACE_CORNERS: [Vec4; 8] = [
    Vec4::new(-1.0, 1.0, -1.0, 1.0),
    Vec4::new(1.0, 1.0, -1.0, 1.0),
    Vec4::new(1.0, -1.0, -1.0, 1.0),
    Vec4::new(-1.0, -1.0, -1.0, 1.0),
    Vec4::new(-1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, -1.0, 1.0, 1.0),
    Vec4::new(-1.0, -1.0, 1.0, 1.0),
];

/// Corner triples spanning each plane, in plane index order.
///
/// The winding makes every normal point toward the interior. Do not reorder.
pub const FRUSTUM_PLANE_POINT_INDICES: [[usize; 3]; 6] = [
    [0, 1, 2], // near
    [6, 5, 4], // far
    [0, 3, 7], // left
    [2, 1, 5], // right
    [3, 2, 6], // bottom
    [0, 4, 5], // top
];

/// Scale applied to the unprojected corners.
///
/// Reconciles the rendering projection's world-size convention with the
/// caller's tile coordinates: x and y (and z unless `z_in_meters`) are
/// multiplied by `2^zoom / world_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionScale {
    /// Size of the world in projection units at zoom 0
    pub world_size: f32,
    /// Map zoom level
    pub zoom: f32,
    /// Keep z in the projection's raw units instead of tile units
    pub z_in_meters: bool,
}

impl Default for ProjectionScale {
    fn default() -> Self {
        Self {
            world_size: 512.0,
            zoom: 0.0,
            z_in_meters: false,
        }
    }
}

impl ProjectionScale {
    pub fn new(world_size: f32, zoom: f32, z_in_meters: bool) -> Self {
        Self { world_size, zoom, z_in_meters }
    }

    pub fn with_world_size(mut self, world_size: f32) -> Self {
        self.world_size = world_size;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_z_in_meters(mut self, z_in_meters: bool) -> Self {
        self.z_in_meters = z_in_meters;
        self
    }

    /// `2^zoom / world_size`
    pub fn scale(&self) -> f32 {
        self.zoom.exp2() / self.world_size
    }
}

/// View frustum: corners and planes.
///
/// Points are ordered like `CLIP_SPACE_CORNERS`; planes follow
/// near, far, left, right, bottom, top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Eight corners: near face then far face (TL, TR, BR, BL)
    pub points: [Vec3; 8],
    /// Six inward planes (nx, ny, nz, d)
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Build a frustum by unprojecting the clip-space cube.
    ///
    /// Each clip corner goes through `inv_proj`, is divided by `w`, and is
    /// scaled by `2^zoom / world_size` (z keeps the plain `1/w` scale when
    /// `z_in_meters` is set). Planes are spanned by the corner triples of
    /// `FRUSTUM_PLANE_POINT_INDICES`.
    ///
    /// Degenerate projections are not rejected here; they produce NaN
    /// planes and a warning. Use `try_from_inv_projection` to reject them.
    pub fn from_inv_projection_matrix(
        inv_proj: &Mat4,
        world_size: f32,
        zoom: f32,
        z_in_meters: bool,
    ) -> Self {
        Self::from_inv_projection(inv_proj, &ProjectionScale::new(world_size, zoom, z_in_meters))
    }

    /// Same as `from_inv_projection_matrix`, driven by a `ProjectionScale`.
    pub fn from_inv_projection(inv_proj: &Mat4, scale: &ProjectionScale) -> Self {
        let points = Self::unproject_corners(inv_proj, scale);
        let planes = FRUSTUM_PLANE_POINT_INDICES.map(|[p0, p1, p2]| {
            Self::plane_from_points(points[p0], points[p1], points[p2])
        });

        if planes.iter().any(|plane| !plane.is_finite()) {
            crate::geo_warn!(
                "geo::Frustum",
                "Degenerate projection (world_size {}, zoom {}): frustum has non-finite planes",
                scale.world_size,
                scale.zoom
            );
        } else {
            crate::geo_trace!(
                "geo::Frustum",
                "Built frustum at zoom {} (near-left-top {}, far-right-bottom {})",
                scale.zoom,
                points[0],
                points[6]
            );
        }

        Self { points, planes }
    }

    /// Checked form of `from_inv_projection`.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateProjection` if `world_size` is not a positive
    /// finite number, a corner has `w == 0` or a non-finite result, or the
    /// three points of a plane are collinear.
    pub fn try_from_inv_projection(inv_proj: &Mat4, scale: &ProjectionScale) -> Result<Self> {
        if !(scale.world_size.is_finite() && scale.world_size > 0.0) || !scale.zoom.is_finite() {
            return Err(error::log_and_return(
                "geo::Frustum",
                Error::DegenerateProjection(format!(
                    "invalid scale: world_size {}, zoom {}",
                    scale.world_size, scale.zoom
                )),
            ));
        }

        for (i, corner) in CLIP_SPACE_CORNERS.iter().enumerate() {
            let w = (*inv_proj * *corner).w;
            if w == 0.0 || !w.is_finite() {
                return Err(error::log_and_return(
                    "geo::Frustum",
                    Error::DegenerateProjection(format!("corner {} has w = {}", i, w)),
                ));
            }
        }

        let points = Self::unproject_corners(inv_proj, scale);
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(error::log_and_return(
                "geo::Frustum",
                Error::DegenerateProjection(format!("corner {} is not finite", i)),
            ));
        }

        for (plane, [p0, p1, p2]) in FRUSTUM_PLANE_POINT_INDICES.iter().enumerate() {
            let a = points[*p0] - points[*p1];
            let b = points[*p2] - points[*p1];
            if a.cross(b).length_squared() == 0.0 {
                return Err(error::log_and_return(
                    "geo::Frustum",
                    Error::DegenerateProjection(format!("plane {} has collinear points", plane)),
                ));
            }
        }

        Ok(Self::from_inv_projection(inv_proj, scale))
    }

    fn unproject_corners(inv_proj: &Mat4, scale: &ProjectionScale) -> [Vec3; 8] {
        let s = scale.scale();
        CLIP_SPACE_CORNERS.map(|corner| {
            let p = *inv_proj * corner;
            let inv_w = 1.0 / p.w;
            let k = inv_w * s;
            let kz = if scale.z_in_meters { inv_w } else { k };
            Vec3::new(p.x * k, p.y * k, p.z * kz)
        })
    }

    /// Plane through three points; normal = normalize((p0 - p1) x (p2 - p1)).
    fn plane_from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec4 {
        let a = p0 - p1;
        let b = p2 - p1;
        let n = a.cross(b).normalize();
        let d = -n.dot(p1);
        n.extend(d)
    }

    /// Plane by index (`PLANE_NEAR` .. `PLANE_TOP`).
    pub fn plane(&self, index: usize) -> Vec4 {
        self.planes[index]
    }

    /// Mean of the eight corners. Always inside a well-formed frustum.
    pub fn center(&self) -> Vec3 {
        self.points.iter().copied().sum::<Vec3>() / 8.0
    }

    /// Test if a point lies inside (or on) all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }

    /// Planes as tightly packed bytes (6 x vec4<f32>) for GPU upload.
    pub fn plane_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.planes)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
