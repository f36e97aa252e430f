//! Kind-segregated scene view for the parallel strategy.
//!
//! Parallel units scan plain per-kind arrays with no enum dispatch; each
//! record carries its own copy of its material, so a unit's inputs are
//! pure values shared immutably across the dispatch.

use crate::camera::Camera;
use crate::geometry::{hit_plane, hit_rect, hit_sphere, Hit, Hittable, Shape, HIT_EPSILON};
use crate::light::{AmbientLight, DirectionalLight, PointLight};
use crate::material::Material;
use crate::scene::Scene;
use crate::shading::Lights;
use crate::Color;
use lux_math::{Interval, Ray, Vec3};

#[derive(Debug, Clone, Copy)]
struct FlatSphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

#[derive(Debug, Clone, Copy)]
struct FlatPlane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

#[derive(Debug, Clone, Copy)]
struct FlatRect {
    point: Vec3,
    edge_a: Vec3,
    edge_b: Vec3,
    normal: Vec3,
    material: Material,
}

/// A scene snapshot flattened into per-kind value arrays plus copies of
/// the lights, camera, and background.
#[derive(Debug, Clone)]
pub struct FlatScene {
    spheres: Vec<FlatSphere>,
    planes: Vec<FlatPlane>,
    rects: Vec<FlatRect>,
    camera: Camera,
    background: Color,
    directional_lights: Vec<DirectionalLight>,
    point_lights: Vec<PointLight>,
    ambient: AmbientLight,
}

impl FlatScene {
    /// Flatten a scene. The match is exhaustive over `Shape`, so a
    /// primitive kind without a flat representation cannot exist.
    pub fn new(scene: &Scene) -> Self {
        let mut spheres = Vec::new();
        let mut planes = Vec::new();
        let mut rects = Vec::new();
        for primitive in scene.primitives() {
            let material = primitive.material;
            match primitive.shape {
                Shape::Sphere { center, radius } => spheres.push(FlatSphere {
                    center,
                    radius,
                    material,
                }),
                Shape::Plane { point, normal } => planes.push(FlatPlane {
                    point,
                    normal,
                    material,
                }),
                Shape::Rect {
                    point,
                    edge_a,
                    edge_b,
                    normal,
                } => rects.push(FlatRect {
                    point,
                    edge_a,
                    edge_b,
                    normal,
                    material,
                }),
            }
        }
        Self {
            spheres,
            planes,
            rects,
            camera: *scene.camera(),
            background: scene.background(),
            directional_lights: scene.directional_lights().to_vec(),
            point_lights: scene.point_lights().to_vec(),
            ambient: *scene.ambient_light(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn lights(&self) -> Lights<'_> {
        Lights {
            ambient: &self.ambient,
            directional: &self.directional_lights,
            point: &self.point_lights,
        }
    }
}

impl Hittable for FlatScene {
    /// Same strictly-closer scan as the scene's, visiting spheres, then
    /// planes, then rects.
    fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest = f32::INFINITY;
        let mut found = None;

        for sphere in &self.spheres {
            let range = Interval::new(HIT_EPSILON, closest);
            if let Some(hit) = hit_sphere(sphere.center, sphere.radius, ray, range) {
                closest = hit.t;
                found = Some((hit, &sphere.material));
            }
        }
        for plane in &self.planes {
            let range = Interval::new(HIT_EPSILON, closest);
            if let Some(hit) = hit_plane(plane.point, plane.normal, ray, range) {
                closest = hit.t;
                found = Some((hit, &plane.material));
            }
        }
        for rect in &self.rects {
            let range = Interval::new(HIT_EPSILON, closest);
            if let Some(hit) = hit_rect(rect.point, rect.edge_a, rect.edge_b, rect.normal, ray, range)
            {
                closest = hit.t;
                found = Some((hit, &rect.material));
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
        self.spheres
            .iter()
            .any(|s| hit_sphere(s.center, s.radius, ray, range).is_some())
            || self
                .planes
                .iter()
                .any(|p| hit_plane(p.point, p.normal, ray, range).is_some())
            || self
                .rects
                .iter()
                .any(|r| hit_rect(r.point, r.edge_a, r.edge_b, r.normal, ray, range).is_some())
    }
}
