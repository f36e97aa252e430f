//! Scene container: camera, primitives, lights, background.

use crate::camera::Camera;
use crate::error::RenderError;
use crate::geometry::{Hit, Hittable, Primitive, Shape, HIT_EPSILON};
use crate::light::{AmbientLight, DirectionalLight, Light, PointLight};
use crate::material::Material;
use crate::shading::Lights;
use crate::Color;
use lux_math::{Interval, Ray};

/// A complete renderable scene.
///
/// Built up through the `add_*`/`set_*` surface, then treated as immutable
/// for the duration of a render (renders only ever borrow it shared).
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    background: Color,
    primitives: Vec<Primitive>,
    directional_lights: Vec<DirectionalLight>,
    point_lights: Vec<PointLight>,
    ambient: AmbientLight,
}

impl Scene {
    pub fn new(camera: Camera, background: Color) -> Self {
        Self {
            camera,
            background,
            primitives: Vec::new(),
            directional_lights: Vec::new(),
            point_lights: Vec::new(),
            ambient: AmbientLight::default(),
        }
    }

    /// Add a primitive carrying its material.
    pub fn add_primitive(&mut self, shape: Shape, material: Material) {
        self.primitives.push(Primitive { shape, material });
    }

    /// Add a light; an ambient light replaces the current one.
    pub fn add_light(&mut self, light: Light) {
        match light {
            Light::Directional(light) => self.directional_lights.push(light),
            Light::Point(light) => self.point_lights.push(light),
            Light::Ambient(light) => self.ambient = light,
        }
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    pub fn set_ambient_light(&mut self, ambient: AmbientLight) {
        self.ambient = ambient;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional_lights
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient
    }

    pub fn lights(&self) -> Lights<'_> {
        Lights {
            ambient: &self.ambient,
            directional: &self.directional_lights,
            point: &self.point_lights,
        }
    }

    /// Reject degenerate inputs before they propagate NaN through a render:
    /// collapsed camera bases, zero-radius spheres, zero-length normals or
    /// edges.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.camera.is_finite() {
            return Err(RenderError::DegenerateCamera);
        }
        for (index, primitive) in self.primitives.iter().enumerate() {
            match primitive.shape {
                Shape::Sphere { radius, .. } => {
                    if !(radius > 0.0 && radius.is_finite()) {
                        return Err(RenderError::DegeneratePrimitive(format!(
                            "sphere {index} has non-positive radius {radius}"
                        )));
                    }
                }
                Shape::Plane { normal, .. } => {
                    if !normal.is_finite() {
                        return Err(RenderError::DegeneratePrimitive(format!(
                            "plane {index} has a zero-length normal"
                        )));
                    }
                }
                Shape::Rect {
                    edge_a,
                    edge_b,
                    normal,
                    ..
                } => {
                    if !normal.is_finite() {
                        return Err(RenderError::DegeneratePrimitive(format!(
                            "rect {index} has a zero-length normal"
                        )));
                    }
                    if edge_a.length_squared() == 0.0 || edge_b.length_squared() == 0.0 {
                        return Err(RenderError::DegeneratePrimitive(format!(
                            "rect {index} has a zero-length edge"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Hittable for Scene {
    /// Linear scan over all primitives; the strictly closer candidate wins,
    /// so an exact tie keeps the first primitive in insertion order.
    fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest = f32::INFINITY;
        let mut found = None;
        for primitive in &self.primitives {
            if let Some(hit) = primitive.shape.hit(ray, Interval::new(HIT_EPSILON, closest)) {
                closest = hit.t;
                found = Some((hit, &primitive.material));
            }
        }
        found.map(|(hit, material)| Hit {
            t: hit.t,
            point: ray.at(hit.t),
            normal: hit.normal,
            material,
        })
    }

    fn occluded(&self, ray: &Ray, max_dist: f32) -> bool {
        let range = Interval::new(HIT_EPSILON, max_dist);
        self.primitives
            .iter()
            .any(|primitive| primitive.shape.hit(ray, range).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Glossy, Matte};
    use lux_math::Vec3;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 100.0)
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        scene.add_primitive(
            Shape::sphere(Vec3::new(0.0, 0.0, -20.0), 1.0),
            Matte::new(Color::X).into(),
        );
        scene.add_primitive(
            Shape::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0),
            Matte::new(Color::Y).into(),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
        match hit.material {
            Material::Matte(matte) => assert_eq!(matte.diffuse().color, Color::Y),
            Material::Glossy(_) => panic!("wrong primitive hit"),
        }
    }

    #[test]
    fn test_nearest_hit_tie_keeps_first_added() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        // Two coincident planes; insertion order is the documented
        // tie-break.
        scene.add_primitive(
            Shape::plane(Vec3::ZERO, Vec3::Z),
            Matte::new(Color::X).into(),
        );
        scene.add_primitive(
            Shape::plane(Vec3::ZERO, Vec3::Z),
            Matte::new(Color::Y).into(),
        );

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray).unwrap();
        match hit.material {
            Material::Matte(matte) => assert_eq!(matte.diffuse().color, Color::X),
            Material::Glossy(_) => panic!("unexpected material"),
        }
    }

    #[test]
    fn test_occlusion_respects_max_distance() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        scene.add_primitive(
            Shape::sphere(Vec3::new(0.0, 0.0, -10.0), 1.0),
            Matte::new(Color::ONE).into(),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.occluded(&ray, 20.0));
        assert!(!scene.occluded(&ray, 5.0));
    }

    #[test]
    fn test_validate_rejects_zero_radius() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        scene.add_primitive(Shape::sphere(Vec3::ZERO, 0.0), Matte::new(Color::ONE).into());
        assert!(matches!(
            scene.validate(),
            Err(RenderError::DegeneratePrimitive(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_normal() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        scene.add_primitive(
            Shape::plane(Vec3::ZERO, Vec3::ZERO),
            Matte::new(Color::ONE).into(),
        );
        assert!(matches!(
            scene.validate(),
            Err(RenderError::DegeneratePrimitive(_))
        ));
    }

    #[test]
    fn test_validate_rejects_degenerate_camera() {
        let camera = Camera::new(Vec3::ONE, Vec3::ONE, Vec3::Y, 100.0);
        let scene = Scene::new(camera, Color::ZERO);
        assert_eq!(scene.validate(), Err(RenderError::DegenerateCamera));
    }

    #[test]
    fn test_add_light_dispatch() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        scene.add_light(Light::Directional(DirectionalLight::new(
            Color::ONE,
            1.0,
            Vec3::Y,
        )));
        scene.add_light(Light::Point(PointLight::new(Color::ONE, 1.0, Vec3::ZERO)));
        scene.add_light(Light::Ambient(AmbientLight::new(Color::ONE, 0.25)));

        assert_eq!(scene.directional_lights().len(), 1);
        assert_eq!(scene.point_lights().len(), 1);
        assert_eq!(scene.ambient_light().scale, 0.25);
    }

    #[test]
    fn test_glossy_material_survives_roundtrip() {
        let mut scene = Scene::new(test_camera(), Color::ZERO);
        scene.add_primitive(
            Shape::plane(Vec3::new(0.0, -10.0, 0.0), Vec3::Y),
            Glossy::new(Color::ONE).with_specular(0.7, 40.0).into(),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.nearest_hit(&ray).unwrap();
        assert!(matches!(hit.material, Material::Glossy(_)));
    }
}
