//! Query primitives — ray, frustum and axis-aligned box.
//!
//! Plain value types. A caller builds a `Frustum` once per frame and
//! classifies many `Aabb`s against it; `Ray` is used on its own for
//! picking against a globe sphere or a ground plane.

mod aabb;
mod frustum;
mod ray;

pub use aabb::{Aabb, FrustumTest};
pub use frustum::{
    Frustum, ProjectionScale,
    CLIP_SPACE_CORNERS, FRUSTUM_PLANE_POINT_INDICES,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP,
};
pub use ray::{Ray, SphereContact, PARALLEL_EPSILON};
