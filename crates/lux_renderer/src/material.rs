//! Matte and glossy materials built from BRDF terms.

use crate::brdf::{Lambertian, Specular};
use crate::Color;
use lux_math::Vec3;

/// Diffuse-only material: an ambient and a diffuse Lambertian term
/// sharing one base color.
#[derive(Debug, Clone, Copy)]
pub struct Matte {
    ambient: Lambertian,
    diffuse: Lambertian,
}

impl Matte {
    /// Create a matte material with the given base color and unit
    /// ambient/diffuse intensities.
    pub fn new(color: Color) -> Self {
        Self {
            ambient: Lambertian::new(1.0, color),
            diffuse: Lambertian::new(1.0, color),
        }
    }

    /// Set the ambient intensity.
    pub fn with_ambient(mut self, intensity: f32) -> Self {
        self.ambient.intensity = intensity;
        self
    }

    /// Set the diffuse intensity.
    pub fn with_diffuse(mut self, intensity: f32) -> Self {
        self.diffuse.intensity = intensity;
        self
    }

    pub fn ambient(&self) -> &Lambertian {
        &self.ambient
    }

    pub fn diffuse(&self) -> &Lambertian {
        &self.diffuse
    }
}

/// Matte terms plus a specular lobe, all sharing one base color; the
/// lobe's intensity and exponent are set independently.
#[derive(Debug, Clone, Copy)]
pub struct Glossy {
    ambient: Lambertian,
    diffuse: Lambertian,
    specular: Specular,
}

impl Glossy {
    /// Create a glossy material with the given base color, unit
    /// intensities, and a specular exponent of 1.
    pub fn new(color: Color) -> Self {
        Self {
            ambient: Lambertian::new(1.0, color),
            diffuse: Lambertian::new(1.0, color),
            specular: Specular::new(1.0, color, 1.0),
        }
    }

    /// Set the ambient intensity.
    pub fn with_ambient(mut self, intensity: f32) -> Self {
        self.ambient.intensity = intensity;
        self
    }

    /// Set the diffuse intensity.
    pub fn with_diffuse(mut self, intensity: f32) -> Self {
        self.diffuse.intensity = intensity;
        self
    }

    /// Set the specular lobe's intensity and exponent.
    pub fn with_specular(mut self, intensity: f32, exponent: f32) -> Self {
        self.specular.intensity = intensity;
        self.specular.exponent = exponent;
        self
    }

    pub fn ambient(&self) -> &Lambertian {
        &self.ambient
    }

    pub fn diffuse(&self) -> &Lambertian {
        &self.diffuse
    }

    pub fn specular(&self) -> &Specular {
        &self.specular
    }
}

/// The closed set of surface materials.
///
/// A sum type rather than a tag plus optional payloads: a primitive always
/// carries exactly one material and the variant cannot disagree with its
/// payload.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    Matte(Matte),
    Glossy(Glossy),
}

impl Material {
    /// Total reflectance of the ambient term.
    pub fn ambient_rho(&self) -> Color {
        match self {
            Material::Matte(m) => m.ambient().rho(),
            Material::Glossy(g) => g.ambient().rho(),
        }
    }

    /// Combined BRDF value for a light sample.
    ///
    /// `wo` points back toward the viewer, `wi` toward the light.
    pub fn f(&self, normal: Vec3, wo: Vec3, wi: Vec3) -> Color {
        match self {
            Material::Matte(m) => m.diffuse().f(),
            Material::Glossy(g) => g.diffuse().f() + g.specular().f(normal, wo, wi),
        }
    }
}

impl From<Matte> for Material {
    fn from(matte: Matte) -> Self {
        Material::Matte(matte)
    }
}

impl From<Glossy> for Material {
    fn from(glossy: Glossy) -> Self {
        Material::Glossy(glossy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matte_shares_base_color() {
        let matte = Matte::new(Color::new(0.3, 0.9, 0.3))
            .with_ambient(0.6)
            .with_diffuse(1.0);

        assert_eq!(matte.ambient().color, matte.diffuse().color);
        assert_eq!(matte.ambient().intensity, 0.6);
        assert_eq!(matte.diffuse().intensity, 1.0);
    }

    #[test]
    fn test_glossy_specular_settings() {
        let glossy = Glossy::new(Color::new(0.0, 0.75, 0.75))
            .with_ambient(0.5)
            .with_diffuse(0.7)
            .with_specular(0.7, 3.0);

        assert_eq!(glossy.specular().color, glossy.diffuse().color);
        assert_eq!(glossy.specular().intensity, 0.7);
        assert_eq!(glossy.specular().exponent, 3.0);
    }

    #[test]
    fn test_matte_f_ignores_geometry() {
        let material = Material::from(Matte::new(Color::ONE));
        let a = material.f(Vec3::Y, Vec3::Y, Vec3::Y);
        let b = material.f(Vec3::Y, Vec3::X, Vec3::Z);
        assert_eq!(a, b);
    }

    #[test]
    fn test_glossy_f_adds_lobe_on_mirror_side() {
        let material = Material::from(Glossy::new(Color::ONE).with_specular(1.0, 2.0));
        let diffuse_only = Material::from(Matte::new(Color::ONE));

        let wi = Vec3::new(1.0, 1.0, 0.0).normalize();
        let wo = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let glossy_f = material.f(Vec3::Y, wo, wi);
        let matte_f = diffuse_only.f(Vec3::Y, wo, wi);
        assert!(glossy_f.x > matte_f.x);
    }
}
