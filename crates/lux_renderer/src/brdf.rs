//! Reflectance terms the materials are assembled from.

use crate::Color;
use lux_math::Vec3;
use std::f32::consts::FRAC_1_PI;

/// Lambertian (diffuse) reflectance term.
#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    pub intensity: f32,
    pub color: Color,
}

impl Lambertian {
    /// Create a new Lambertian term.
    pub fn new(intensity: f32, color: Color) -> Self {
        Self { intensity, color }
    }

    /// The BRDF value of the diffuse lobe.
    pub fn f(&self) -> Color {
        self.intensity * FRAC_1_PI * self.color
    }

    /// Total reflectance, used for the ambient contribution.
    pub fn rho(&self) -> Color {
        self.intensity * self.color
    }
}

/// Phong-like specular lobe.
#[derive(Debug, Clone, Copy)]
pub struct Specular {
    pub intensity: f32,
    pub color: Color,
    pub exponent: f32,
}

impl Specular {
    /// Create a new specular term.
    pub fn new(intensity: f32, color: Color, exponent: f32) -> Self {
        Self {
            intensity,
            color,
            exponent,
        }
    }

    /// The BRDF value of the specular lobe.
    ///
    /// `wo` points back toward the viewer, `wi` toward the light; the lobe
    /// peaks when `wo` lines up with the mirror reflection of `wi` about
    /// `normal` and is black on the wrong side of the mirror direction.
    pub fn f(&self, normal: Vec3, wo: Vec3, wi: Vec3) -> Color {
        let alignment = reflect(wi, normal).dot(wo);
        if alignment > 0.0 {
            self.intensity * alignment.powf(self.exponent) * self.color
        } else {
            Color::ZERO
        }
    }

    /// A specular lobe contributes nothing to the ambient term.
    pub fn rho(&self) -> Color {
        Color::ZERO
    }
}

/// Mirror a direction about a surface normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    -v + 2.0 * v.dot(n) * n
}
