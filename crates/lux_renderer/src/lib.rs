//! Lux - CPU direct-lighting ray tracer
//!
//! Casts jittered primary rays per pixel, intersects them against a closed
//! set of primitives (sphere, plane, rectangle), and evaluates a local
//! shading model (ambient + diffuse + optional specular) with shadow rays.
//!
//! Two render strategies share all of the math: a sequential per-pixel
//! loop and an embarrassingly parallel per-pixel batch over rayon. Given
//! the same jitter and sample-group offsets they produce the same image.

mod brdf;
mod camera;
mod error;
mod flat;
mod geometry;
mod light;
mod material;
mod renderer;
mod sampler;
mod scene;
mod shading;

pub use brdf::{Lambertian, Specular};
pub use camera::Camera;
pub use error::RenderError;
pub use flat::FlatScene;
pub use geometry::{Hit, Hittable, Primitive, Shape, SurfaceHit, HIT_EPSILON};
pub use light::{
    AmbientLight, DirectionalLight, Light, PointLight, DIRECTIONAL_SHADOW_RANGE,
};
pub use material::{Glossy, Material, Matte};
pub use renderer::{
    render_parallel, render_parallel_with_offsets, render_sequential, ImageBuffer, RenderConfig,
};
pub use sampler::Sampler;
pub use scene::Scene;
pub use shading::{shade, trace, Lights};

/// Re-export the math types used throughout the public API
pub use lux_math::{Interval, Ray, Vec2, Vec3};

/// Color type alias (linear RGB, unclamped in the core)
pub type Color = Vec3;
