//! Geometric primitives and their ray-intersection tests.

use crate::material::Material;
use lux_math::{Interval, Ray, Vec3};

/// Hits are accepted only strictly above this distance; suppresses
/// self-intersection acne on shadow rays leaving a surface. Every
/// intersection path uses this same threshold.
pub const HIT_EPSILON: f32 = 1e-4;

/// Geometry-only intersection result: the parametric distance and the
/// surface normal at the hit point.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    pub t: f32,
    pub normal: Vec3,
}

/// The closed set of primitive shapes.
///
/// Stored normals are unit length; the constructors normalize their inputs,
/// so build shapes through them.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
    },
    Rect {
        point: Vec3,
        edge_a: Vec3,
        edge_b: Vec3,
        normal: Vec3,
    },
}

impl Shape {
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere { center, radius }
    }

    pub fn plane(point: Vec3, normal: Vec3) -> Self {
        Shape::Plane {
            point,
            normal: normal.normalize(),
        }
    }

    /// A bounded rectangle: `point` is one corner, `edge_a` and `edge_b`
    /// span the two sides.
    pub fn rect(point: Vec3, edge_a: Vec3, edge_b: Vec3, normal: Vec3) -> Self {
        Shape::Rect {
            point,
            edge_a,
            edge_b,
            normal: normal.normalize(),
        }
    }

    /// Nearest intersection with `ray` inside `range`, or None.
    pub fn hit(&self, ray: &Ray, range: Interval) -> Option<SurfaceHit> {
        match *self {
            Shape::Sphere { center, radius } => hit_sphere(center, radius, ray, range),
            Shape::Plane { point, normal } => hit_plane(point, normal, ray, range),
            Shape::Rect {
                point,
                edge_a,
                edge_b,
                normal,
            } => hit_rect(point, edge_a, edge_b, normal, ray, range),
        }
    }
}

pub(crate) fn hit_sphere(
    center: Vec3,
    radius: f32,
    ray: &Ray,
    range: Interval,
) -> Option<SurfaceHit> {
    let oc = ray.origin - center;
    let a = ray.direction.length_squared();
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();

    // Prefer the nearer surface point; fall back to the far root when the
    // origin is inside the sphere or the near root is below the epsilon.
    let mut root = (-b - sqrtd) / (2.0 * a);
    if !range.surrounds(root) {
        root = (-b + sqrtd) / (2.0 * a);
        if !range.surrounds(root) {
            return None;
        }
    }

    Some(SurfaceHit {
        t: root,
        normal: (oc + root * ray.direction).normalize(),
    })
}

pub(crate) fn hit_plane(point: Vec3, normal: Vec3, ray: &Ray, range: Interval) -> Option<SurfaceHit> {
    // A ray parallel to the plane divides by zero; the non-finite t fails
    // the range test.
    let t = (point - ray.origin).dot(normal) / ray.direction.dot(normal);
    range
        .surrounds(t)
        .then_some(SurfaceHit { t, normal })
}

pub(crate) fn hit_rect(
    point: Vec3,
    edge_a: Vec3,
    edge_b: Vec3,
    normal: Vec3,
    ray: &Ray,
    range: Interval,
) -> Option<SurfaceHit> {
    let plane_hit = hit_plane(point, normal, ray, range)?;

    let offset = ray.at(plane_hit.t) - point;
    let along_a = offset.dot(edge_a);
    if along_a < 0.0 || along_a > edge_a.length_squared() {
        return None;
    }
    let along_b = offset.dot(edge_b);
    if along_b < 0.0 || along_b > edge_b.length_squared() {
        return None;
    }

    Some(plane_hit)
}

/// A shape with its material; the unit the scene is built from.
#[derive(Debug, Clone, Copy)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

/// A full intersection record as seen by the shading code.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: &'a Material,
}

/// Anything rays can be traced against: the scene's primitive list for the
/// sequential strategy, the flattened per-kind arrays for the parallel one.
pub trait Hittable {
    /// The nearest hit strictly beyond [`HIT_EPSILON`], or None.
    fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>>;

    /// True if anything intersects `ray` before `max_dist`. Used for
    /// shadow rays; `max_dist` is the distance to the light.
    fn occluded(&self, ray: &Ray, max_dist: f32) -> bool;
}
