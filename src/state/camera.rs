//! Perspective orbit camera. Unprojects screen points into world rays for
//! hit-testing and projects world points back for drawing.

use crate::geom::{Ray, Vec3};

const MIN_PITCH: f64 = -1.4;
const MAX_PITCH: f64 = -0.08;
const MIN_DISTANCE: f64 = 1.4;
const MAX_DISTANCE: f64 = 8.0;
/// Points closer than this along the view axis are behind the near plane.
const NEAR: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    pub dragging: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 0.5, -0.4),
            yaw: std::f64::consts::PI,
            pitch: -0.5,
            distance: 3.6,
            fov_y: 60.0_f64.to_radians(),
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }
}

impl OrbitCamera {
    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        let cp = self.pitch.cos();
        Vec3::new(self.yaw.sin() * cp, self.pitch.sin(), self.yaw.cos() * cp)
    }

    pub fn eye(&self) -> Vec3 {
        self.target - self.forward() * self.distance
    }

    /// Orthonormal (right, up, forward) view basis.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let f = self.forward();
        let right = f.cross(Vec3::Y).normalized();
        let up = right.cross(f);
        (right, up, f)
    }

    /// World-space ray through a screen point.
    pub fn screen_ray(&self, x: f64, y: f64, width: f64, height: f64) -> Ray {
        let (right, up, f) = self.basis();
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * (width / height.max(1.0));
        let nx = (2.0 * x / width.max(1.0) - 1.0) * half_w;
        let ny = (1.0 - 2.0 * y / height.max(1.0)) * half_h;
        Ray::new(self.eye(), f + right * nx + up * ny)
    }

    /// Screen position and view depth of a world point; `None` behind the
    /// near plane.
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<(f64, f64, f64)> {
        let (right, up, f) = self.basis();
        let d = p - self.eye();
        let depth = d.dot(f);
        if depth < NEAR {
            return None;
        }
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * (width / height.max(1.0));
        let nx = d.dot(right) / (depth * half_w);
        let ny = d.dot(up) / (depth * half_h);
        let sx = (nx + 1.0) * 0.5 * width;
        let sy = (1.0 - ny) * 0.5 * height;
        Some((sx, sy, depth))
    }

    pub fn orbit(&mut self, dyaw: f64, dpitch: f64) {
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(MIN_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, factor: f64) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn reset(&mut self) {
        let fresh = OrbitCamera::default();
        self.target = fresh.target;
        self.yaw = fresh.yaw;
        self.pitch = fresh.pitch;
        self.distance = fresh.distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    #[test]
    fn center_pixel_ray_points_forward() {
        let cam = OrbitCamera::default();
        let ray = cam.screen_ray(W / 2.0, H / 2.0, W, H);
        assert!(ray.dir.dot(cam.forward()) > 0.9999);
        let eye = cam.eye();
        assert!((ray.origin - eye).length() < 1e-9);
    }

    #[test]
    fn forward_point_projects_to_center() {
        let cam = OrbitCamera::default();
        let p = cam.eye() + cam.forward() * 2.0;
        let (sx, sy, depth) = cam.project(p, W, H).unwrap();
        assert!((sx - W / 2.0).abs() < 1e-6);
        assert!((sy - H / 2.0).abs() < 1e-6);
        assert!((depth - 2.0).abs() < 1e-9);
    }

    #[test]
    fn project_and_screen_ray_are_consistent() {
        let cam = OrbitCamera::default();
        let p = Vec3::new(0.4, 0.2, -1.1);
        let (sx, sy, _) = cam.project(p, W, H).unwrap();
        let ray = cam.screen_ray(sx, sy, W, H);
        let to_p = (p - ray.origin).normalized();
        assert!(ray.dir.dot(to_p) > 0.99999);
    }

    #[test]
    fn points_behind_the_eye_do_not_project() {
        let cam = OrbitCamera::default();
        let behind = cam.eye() - cam.forward() * 1.0;
        assert!(cam.project(behind, W, H).is_none());
    }

    #[test]
    fn orbit_and_zoom_are_clamped() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, -10.0);
        assert!(cam.pitch >= MIN_PITCH);
        cam.orbit(0.0, 10.0);
        assert!(cam.pitch <= MAX_PITCH);
        cam.zoom(0.0001);
        assert!(cam.distance >= MIN_DISTANCE);
        cam.zoom(1000.0);
        assert!(cam.distance <= MAX_DISTANCE);
    }
}
