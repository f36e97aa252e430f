//! Camera basis construction and primary-ray generation.

use lux_math::{Ray, Vec2, Vec3};

/// Pinhole camera over a view plane at a fixed distance along -w.
///
/// The orthonormal basis (u right, v up, w backward) is derived once at
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    view_plane_distance: f32,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a camera looking from `eye` toward `look_at`.
    pub fn new(eye: Vec3, look_at: Vec3, up: Vec3, view_plane_distance: f32) -> Self {
        let (u, v, w) = basis(eye, look_at, up);
        Self {
            eye,
            look_at,
            up,
            view_plane_distance,
            u,
            v,
            w,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    /// True when the derived basis contains no NaN components. A camera
    /// whose eye and look-at coincide fails this.
    pub fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite() && self.w.is_finite()
    }

    /// Unit view direction through a point on the centered pixel plane.
    pub fn ray_direction(&self, pixel: Vec2) -> Vec3 {
        (pixel.x * self.u + pixel.y * self.v - self.view_plane_distance * self.w).normalize()
    }

    /// Primary ray from the eye through a pixel-plane point.
    pub fn primary_ray(&self, pixel: Vec2) -> Ray {
        Ray::new(self.eye, self.ray_direction(pixel))
    }
}

/// Orthonormal basis from eye/look-at/up.
///
/// Looking straight up or down leaves `up` parallel to the view direction
/// and the cross product collapses; those two cases substitute a fixed
/// basis chosen by whether the eye sits above or below the target.
fn basis(eye: Vec3, look_at: Vec3, up: Vec3) -> (Vec3, Vec3, Vec3) {
    if eye.x == look_at.x && eye.z == look_at.z {
        if eye.y > look_at.y {
            return (Vec3::Z, Vec3::X, Vec3::Y);
        }
        if eye.y < look_at.y {
            return (Vec3::X, Vec3::Z, Vec3::NEG_Y);
        }
    }
    let w = (eye - look_at).normalize();
    let u = up.cross(w).normalize();
    let v = w.cross(u);
    (u, v, w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(camera: &Camera) {
        let (u, v, w) = camera.basis();
        assert!(u.dot(v).abs() < 1e-5);
        assert!(v.dot(w).abs() < 1e-5);
        assert!(w.dot(u).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!((v.length() - 1.0).abs() < 1e-5);
        assert!((w.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_basis_orthonormal() {
        let triples = [
            (Vec3::new(0.0, 200.0, 1000.0), Vec3::ZERO, Vec3::Y),
            (Vec3::new(120.0, 75.0, 450.0), Vec3::ZERO, Vec3::Y),
            (Vec3::new(-3.0, 2.0, 1.0), Vec3::new(4.0, 0.0, -2.0), Vec3::Y),
            (
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::ZERO,
                Vec3::new(0.3, 1.0, -0.2),
            ),
        ];
        for (eye, look_at, up) in triples {
            assert_orthonormal(&Camera::new(eye, look_at, up, 400.0));
        }
    }

    #[test]
    fn test_straight_down_substitutes_basis() {
        let camera = Camera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y, 100.0);
        assert_eq!(camera.basis(), (Vec3::Z, Vec3::X, Vec3::Y));
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_straight_up_substitutes_basis() {
        let camera = Camera::new(Vec3::new(0.0, -5.0, 0.0), Vec3::ZERO, Vec3::Y, 100.0);
        assert_eq!(camera.basis(), (Vec3::X, Vec3::Z, Vec3::NEG_Y));
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 100.0);
        let dir = camera.ray_direction(Vec2::ZERO);
        assert!((dir - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_ray_direction_is_unit() {
        let camera = Camera::new(Vec3::new(120.0, 75.0, 450.0), Vec3::ZERO, Vec3::Y, 400.0);
        let dir = camera.ray_direction(Vec2::new(250.0, -140.0));
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_coincident_eye_and_target_is_not_finite() {
        let camera = Camera::new(Vec3::ONE, Vec3::ONE, Vec3::Y, 100.0);
        assert!(!camera.is_finite());
    }
}
