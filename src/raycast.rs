//! Screen-point hit-testing against tracked surfaces.
//!
//! The placement controller never raycasts directly; it goes through the
//! `HitTester` seam so tests can substitute canned results.

use crate::geom::{Pose, Ray};
use crate::model::Surface;
use crate::state::OrbitCamera;
use std::cmp::Ordering;

/// Ray parallel to a surface below this cosine is treated as a miss.
const PARALLEL_EPS: f64 = 1e-9;
/// Hits closer than this along the ray are discarded (origin grazing).
const MIN_DISTANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub surface_id: u32,
    pub distance: f64,
    /// Hit point with the surface's orientation.
    pub pose: Pose,
}

pub trait HitTester {
    /// Hit results for a screen point, closest-first. Empty means no tracked
    /// surface under the point.
    fn hit_test(&self, screen_x: f64, screen_y: f64) -> Vec<RayHit>;
}

/// Intersect `ray` with one surface rectangle.
fn intersect(ray: &Ray, surface: &Surface) -> Option<RayHit> {
    let n = surface.normal();
    let denom = ray.dir.dot(n);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let t = (surface.pose.position - ray.origin).dot(n) / denom;
    if t < MIN_DISTANCE {
        return None;
    }
    let point = ray.at(t);
    let local = point - surface.pose.position;
    let u = local.dot(surface.x_axis());
    let v = local.dot(surface.z_axis());
    if u.abs() > surface.extent.0 || v.abs() > surface.extent.1 {
        return None;
    }
    Some(RayHit {
        surface_id: surface.id,
        distance: t,
        pose: Pose::new(point, surface.pose.orientation),
    })
}

/// All surface intersections along `ray`, ordered closest-first.
pub fn raycast(ray: &Ray, surfaces: &[Surface]) -> Vec<RayHit> {
    let mut hits: Vec<RayHit> = surfaces.iter().filter_map(|s| intersect(ray, s)).collect();
    hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    hits
}

/// Production `HitTester`: unprojects the screen point through the camera and
/// raycasts the scene's surfaces.
pub struct SceneHitTester<'a> {
    pub camera: &'a OrbitCamera,
    pub surfaces: &'a [Surface],
    pub width: f64,
    pub height: f64,
}

impl HitTester for SceneHitTester<'_> {
    fn hit_test(&self, screen_x: f64, screen_y: f64) -> Vec<RayHit> {
        let ray = self.camera.screen_ray(screen_x, screen_y, self.width, self.height);
        raycast(&ray, self.surfaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Quat, Vec3};
    use crate::model::SurfaceKind;

    fn horizontal(id: u32, y: f64, half: f64) -> Surface {
        Surface {
            id,
            kind: SurfaceKind::Floor,
            pose: Pose::new(Vec3::new(0.0, y, 0.0), Quat::IDENTITY),
            extent: (half, half),
            max_extent: (half, half),
        }
    }

    fn down_ray(x: f64, y: f64, z: f64) -> Ray {
        Ray::new(Vec3::new(x, y, z), -Vec3::Y)
    }

    #[test]
    fn straight_down_hit_lands_on_the_plane() {
        let floor = horizontal(0, 0.0, 1.0);
        let hits = raycast(&down_ray(0.2, 2.0, 0.3), &[floor]);
        assert_eq!(hits.len(), 1);
        let h = &hits[0];
        assert!((h.distance - 2.0).abs() < 1e-9);
        assert!((h.pose.position.x - 0.2).abs() < 1e-9);
        assert!(h.pose.position.y.abs() < 1e-9);
        assert!((h.pose.position.z - 0.3).abs() < 1e-9);
        assert_eq!(h.pose.orientation, Quat::IDENTITY);
    }

    #[test]
    fn hits_are_ordered_closest_first() {
        // Table above the floor; a ray from above must report the table first.
        let floor = horizontal(0, 0.0, 2.0);
        let table = horizontal(1, 0.75, 0.5);
        let hits = raycast(&down_ray(0.1, 2.0, 0.1), &[floor, table]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].surface_id, 1);
        assert_eq!(hits[1].surface_id, 0);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn miss_outside_extents() {
        let floor = horizontal(0, 0.0, 1.0);
        assert!(raycast(&down_ray(1.5, 2.0, 0.0), &[floor]).is_empty());
    }

    #[test]
    fn miss_behind_the_origin() {
        let floor = horizontal(0, 0.0, 1.0);
        let up = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        assert!(raycast(&up, &[floor]).is_empty());
    }

    #[test]
    fn miss_when_parallel() {
        let floor = horizontal(0, 0.0, 1.0);
        let sideways = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);
        assert!(raycast(&sideways, &[floor]).is_empty());
    }

    #[test]
    fn tilted_surface_reports_its_own_orientation() {
        let q = Quat::from_axis_angle(Vec3::X, std::f64::consts::FRAC_PI_2);
        let wall = Surface {
            id: 3,
            kind: SurfaceKind::Wall,
            pose: Pose::new(Vec3::new(0.0, 1.0, -2.0), q),
            extent: (1.0, 1.0),
            max_extent: (1.0, 1.0),
        };
        let into = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Z);
        let hits = raycast(&into, &[wall]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 2.0).abs() < 1e-9);
        assert_eq!(hits[0].pose.orientation, q);
    }
}
