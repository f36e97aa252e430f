//! Light sources: directional, point, and ambient.

use crate::Color;
use lux_math::Vec3;

/// Shadow reach for directional lights, which sit at infinity.
///
/// Must exceed the scene's bounding scale so that any occluder between a
/// surface and "infinity" registers; the demo scenes stay within a few
/// thousand units.
pub const DIRECTIONAL_SHADOW_RANGE: f32 = 1.0e4;

/// A light at infinity shining along a fixed direction.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Unit direction from any surface toward the light.
    toward: Vec3,
    pub color: Color,
    pub scale: f32,
}

impl DirectionalLight {
    /// Create a directional light; `toward` is normalized here and points
    /// from the scene toward the light.
    pub fn new(color: Color, scale: f32, toward: Vec3) -> Self {
        Self {
            toward: toward.normalize(),
            color,
            scale,
        }
    }

    /// Direction toward the light, independent of the shaded point.
    pub fn direction(&self) -> Vec3 {
        self.toward
    }

    pub fn radiance(&self) -> Color {
        self.scale * self.color
    }
}

/// An omnidirectional light at a fixed location.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub location: Vec3,
    pub color: Color,
    pub scale: f32,
}

impl PointLight {
    pub fn new(color: Color, scale: f32, location: Vec3) -> Self {
        Self {
            location,
            color,
            scale,
        }
    }

    /// Unit direction from the shaded point toward the light.
    pub fn direction(&self, hit_point: Vec3) -> Vec3 {
        (self.location - hit_point).normalize()
    }

    pub fn radiance(&self) -> Color {
        self.scale * self.color
    }
}

/// Directionless fill light applied to every shaded point.
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: Color,
    pub scale: f32,
}

impl AmbientLight {
    pub fn new(color: Color, scale: f32) -> Self {
        Self { color, scale }
    }

    pub fn radiance(&self) -> Color {
        self.scale * self.color
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::new(Color::ONE, 1.0)
    }
}

/// Any light accepted by `Scene::add_light`.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Ambient(AmbientLight),
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl From<AmbientLight> for Light {
    fn from(light: AmbientLight) -> Self {
        Light::Ambient(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_normalizes() {
        let light = DirectionalLight::new(Color::ONE, 1.0, Vec3::new(-0.65, 0.35, 0.0));
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_direction_points_at_light() {
        let light = PointLight::new(Color::ONE, 1.0, Vec3::new(0.0, 10.0, 0.0));
        let dir = light.direction(Vec3::ZERO);
        assert!((dir - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_radiance_scales_color() {
        let light = PointLight::new(Color::new(1.0, 0.5, 0.0), 2.0, Vec3::ZERO);
        assert_eq!(light.radiance(), Color::new(2.0, 1.0, 0.0));

        let ambient = AmbientLight::new(Color::ONE, 0.25);
        assert_eq!(ambient.radiance(), Color::new(0.25, 0.25, 0.25));
    }
}
