use glam::{Mat4, Vec3};
use crate::error::Error;
use crate::primitives::frustum::Frustum;
use super::*;

fn unit_box() -> Aabb {
    Aabb::new(Vec3::ZERO, Vec3::ONE)
}

/// Frustum covering the clip cube [-1, 1]^3.
fn clip_cube_frustum() -> Frustum {
    Frustum::from_inv_projection_matrix(&Mat4::IDENTITY, 1.0, 0.0, false)
}

/// 90° perspective (near 1, far 10) in y-down map coordinates.
fn perspective_frustum() -> Frustum {
    let proj = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0)
        * Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0));
    Frustum::from_inv_projection_matrix(&proj.inverse(), 1.0, 0.0, false)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_computes_center() {
    let aabb = Aabb::new(Vec3::new(-2.0, 0.0, 4.0), Vec3::new(2.0, 6.0, 8.0));
    assert_eq!(aabb.center, Vec3::new(0.0, 3.0, 6.0));
    assert_eq!(aabb.size(), Vec3::new(4.0, 6.0, 4.0));
}

#[test]
fn test_try_new_rejects_inverted_bounds() {
    let result = Aabb::try_new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
    assert!(matches!(result, Err(Error::InvalidBounds(_))));
}

#[test]
fn test_try_new_rejects_infinite_bounds() {
    let result = Aabb::try_new(Vec3::ZERO, Vec3::new(f32::INFINITY, 1.0, 1.0));
    assert!(matches!(result, Err(Error::InvalidBounds(_))));
}

#[test]
fn test_try_new_accepts_flat_box() {
    let aabb = Aabb::try_new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)).unwrap();
    assert_eq!(aabb.size().z, 0.0);
}

#[test]
fn test_from_points() {
    let aabb = Aabb::from_points([
        Vec3::new(1.0, -1.0, 3.0),
        Vec3::new(-2.0, 5.0, 0.0),
        Vec3::new(0.0, 0.0, 7.0),
    ])
    .unwrap();

    assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 5.0, 7.0));
}

#[test]
fn test_from_points_empty() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

// ============================================================================
// Quadrant
// ============================================================================

#[test]
fn test_quadrant_index_mapping() {
    let parent = Aabb::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(4.0, 8.0, 3.0));

    let q0 = parent.quadrant(0);
    assert_eq!((q0.min, q0.max), (Vec3::new(0.0, 0.0, -1.0), Vec3::new(2.0, 4.0, 3.0)));

    let q1 = parent.quadrant(1);
    assert_eq!((q1.min, q1.max), (Vec3::new(2.0, 0.0, -1.0), Vec3::new(4.0, 4.0, 3.0)));

    let q2 = parent.quadrant(2);
    assert_eq!((q2.min, q2.max), (Vec3::new(0.0, 4.0, -1.0), Vec3::new(2.0, 8.0, 3.0)));

    let q3 = parent.quadrant(3);
    assert_eq!((q3.min, q3.max), (Vec3::new(2.0, 4.0, -1.0), Vec3::new(4.0, 8.0, 3.0)));
}

#[test]
fn test_quadrants_partition_parent() {
    let parent = Aabb::new(Vec3::new(-3.0, 1.0, 0.0), Vec3::new(5.0, 2.0, 10.0));
    let children: Vec<Aabb> = (0..4).map(|i| parent.quadrant(i)).collect();

    let area: f32 = children.iter().map(|c| c.size().x * c.size().y).sum();
    let parent_area = parent.size().x * parent.size().y;
    assert!((area - parent_area).abs() < 1e-5);

    let union = children[1..].iter().fold(children[0], |acc, c| acc.encapsulate(c));
    assert_eq!(union, parent);

    for child in &children {
        assert_eq!(child.min.z, parent.min.z);
        assert_eq!(child.max.z, parent.max.z);
    }
}

// ============================================================================
// Distances / closest point
// ============================================================================

#[test]
fn test_distance_per_axis() {
    let aabb = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
    let point = Vec3::new(-3.0, 5.0, 3.0);

    assert_eq!(aabb.distance_x(point), 3.0);
    assert_eq!(aabb.distance_y(point), -1.0);
    assert_eq!(aabb.distance_z(point), 0.0);
    assert_eq!(aabb.distance(point), Vec3::new(3.0, -1.0, 0.0));
}

#[test]
fn test_closest_point() {
    let aabb = unit_box();
    assert_eq!(aabb.closest_point(Vec3::new(2.0, 0.5, -1.0)), Vec3::new(1.0, 0.5, 0.0));
    assert_eq!(aabb.closest_point(Vec3::splat(0.25)), Vec3::splat(0.25));
}

// ============================================================================
// Corners / box queries
// ============================================================================

#[test]
fn test_corners_order() {
    let corners = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0)).corners();

    assert_eq!(corners[0], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(corners[1], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(corners[2], Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(corners[3], Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(corners[4], Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(corners[6], Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_contains_point_and_intersects_aabb() {
    let aabb = unit_box();
    assert!(aabb.contains_point(Vec3::ONE));
    assert!(!aabb.contains_point(Vec3::new(1.1, 0.5, 0.5)));

    let touching = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    let apart = Aabb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(aabb.intersects_aabb(&touching));
    assert!(!aabb.intersects_aabb(&apart));
}

// ============================================================================
// Aabb::intersects (frustum classification)
// ============================================================================

#[test]
fn test_frustum_test_discriminants() {
    assert_eq!(FrustumTest::Outside.as_u8(), 0);
    assert_eq!(FrustumTest::Partial.as_u8(), 1);
    assert_eq!(FrustumTest::Inside.as_u8(), 2);
    assert!(!FrustumTest::Outside.is_visible());
    assert!(FrustumTest::Partial.is_visible());
}

#[test]
fn test_unit_box_inside_clip_cube() {
    assert_eq!(unit_box().intersects(&clip_cube_frustum()), FrustumTest::Inside);
}

#[test]
fn test_far_box_outside_clip_cube() {
    let aabb = Aabb::new(Vec3::splat(1000.0), Vec3::splat(1001.0));
    assert_eq!(aabb.intersects(&clip_cube_frustum()), FrustumTest::Outside);
}

#[test]
fn test_box_straddling_one_plane_is_partial() {
    let aabb = Aabb::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.5, 0.5, 0.5));
    assert_eq!(aabb.intersects(&clip_cube_frustum()), FrustumTest::Partial);
}

#[test]
fn test_box_containing_frustum_is_partial() {
    let aabb = Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0));
    assert_eq!(aabb.intersects(&clip_cube_frustum()), FrustumTest::Partial);
}

#[test]
fn test_perspective_classification() {
    let frustum = perspective_frustum();

    let inside = Aabb::new(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -4.0));
    assert_eq!(inside.intersects(&frustum), FrustumTest::Inside);

    let across_far = Aabb::new(Vec3::new(-1.0, -1.0, -12.0), Vec3::new(1.0, 1.0, -8.0));
    assert_eq!(across_far.intersects(&frustum), FrustumTest::Partial);

    let across_side = Aabb::new(Vec3::new(4.0, -1.0, -6.0), Vec3::new(6.0, 1.0, -4.0));
    assert_eq!(across_side.intersects(&frustum), FrustumTest::Partial);

    let behind = Aabb::new(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 4.0));
    assert_eq!(behind.intersects(&frustum), FrustumTest::Outside);

    let beyond_far = Aabb::new(Vec3::new(-1.0, -1.0, -30.0), Vec3::new(1.0, 1.0, -20.0));
    assert_eq!(beyond_far.intersects(&frustum), FrustumTest::Outside);
}

#[test]
fn test_world_axis_pass_rejects_box_past_frustum_edge() {
    let frustum = perspective_frustum();

    // Diagonally past the far-right edge: every plane keeps at least one
    // corner, so only the world-axis projection separates the two.
    let aabb = Aabb::new(Vec3::new(10.5, -0.5, -12.0), Vec3::new(11.5, 0.5, -9.0));
    for plane in &frustum.planes {
        let inside = aabb
            .corners()
            .iter()
            .filter(|c| plane.truncate().dot(**c) + plane.w >= 0.0)
            .count();
        assert!(inside > 0);
    }

    assert_eq!(aabb.intersects(&frustum), FrustumTest::Outside);
}
