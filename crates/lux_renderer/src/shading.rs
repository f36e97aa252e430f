//! Direct-lighting shading with shadow occlusion.

use crate::geometry::{Hit, Hittable};
use crate::light::{AmbientLight, DirectionalLight, PointLight, DIRECTIONAL_SHADOW_RANGE};
use crate::Color;
use lux_math::Ray;

/// The scene's light lists, borrowed for the duration of one trace.
#[derive(Clone, Copy)]
pub struct Lights<'a> {
    pub ambient: &'a AmbientLight,
    pub directional: &'a [DirectionalLight],
    pub point: &'a [PointLight],
}

/// Trace one ray: nearest hit shaded, or the background color.
pub fn trace<W: Hittable>(world: &W, lights: Lights<'_>, background: Color, ray: &Ray) -> Color {
    match world.nearest_hit(ray) {
        Some(hit) => shade(world, lights, &hit, ray),
        None => background,
    }
}

/// Evaluate the local shading model at a hit.
///
/// Ambient reflectance times ambient radiance, plus each light's BRDF
/// contribution scaled by the facing term. A light contributes only when
/// the surface faces it and the shadow ray toward it reaches the light's
/// distance unobstructed.
pub fn shade<W: Hittable>(world: &W, lights: Lights<'_>, hit: &Hit<'_>, ray: &Ray) -> Color {
    let wo = -ray.direction;
    let mut result = hit.material.ambient_rho() * lights.ambient.radiance();

    for light in lights.directional {
        let wi = light.direction();
        let facing = hit.normal.dot(wi);
        if facing > 0.0 {
            let shadow_ray = Ray::new(hit.point, wi);
            if !world.occluded(&shadow_ray, DIRECTIONAL_SHADOW_RANGE) {
                result += hit.material.f(hit.normal, wo, wi) * light.radiance() * facing;
            }
        }
    }

    for light in lights.point {
        let wi = light.direction(hit.point);
        let facing = hit.normal.dot(wi);
        if facing > 0.0 {
            let shadow_ray = Ray::new(hit.point, wi);
            if !world.occluded(&shadow_ray, light.location.distance(hit.point)) {
                result += hit.material.f(hit.normal, wo, wi) * light.radiance() * facing;
            }
        }
    }

    result
}
