//! Demo scene presets.

use lux_math::Vec3;
use lux_renderer::{
    AmbientLight, Camera, Color, DirectionalLight, Glossy, Light, Matte, PointLight, Scene, Shape,
};

/// Four large spheres over a glossy ground plane, lit by two point lights
/// and one directional light.
pub fn spheres_row() -> Scene {
    let camera = Camera::new(Vec3::new(0.0, 200.0, 1000.0), Vec3::ZERO, Vec3::Y, 1000.0);
    let mut scene = Scene::new(camera, Color::ZERO);

    let cyan = Glossy::new(Color::new(0.0, 0.75, 0.75))
        .with_ambient(0.5)
        .with_diffuse(0.7)
        .with_specular(0.7, 3.0);
    let white = Matte::new(Color::ONE).with_ambient(0.5);
    let green = Glossy::new(Color::new(0.1, 0.8, 0.2))
        .with_ambient(0.5)
        .with_diffuse(0.7)
        .with_specular(1.0, 15.0);
    let red = Glossy::new(Color::new(0.75, 0.0, 0.0))
        .with_ambient(0.5)
        .with_diffuse(0.7)
        .with_specular(0.7, 3.0);
    let ground = Glossy::new(Color::new(0.3, 0.9, 0.3))
        .with_ambient(0.6)
        .with_specular(0.7, 40.0);

    scene.add_primitive(
        Shape::sphere(Vec3::new(-200.0, 100.0, -50.0), 110.0),
        cyan.into(),
    );
    scene.add_primitive(Shape::sphere(Vec3::new(0.0, 100.0, 0.0), 110.0), white.into());
    scene.add_primitive(
        Shape::sphere(Vec3::new(200.0, 100.0, 50.0), 110.0),
        green.into(),
    );
    scene.add_primitive(
        Shape::sphere(Vec3::new(200.0, 100.0, 250.0), 110.0),
        red.into(),
    );
    scene.add_primitive(
        Shape::plane(Vec3::new(0.0, -10.0, 0.0), Vec3::Y),
        ground.into(),
    );

    scene.add_light(Light::Point(PointLight::new(
        Color::ONE,
        1.0,
        Vec3::new(-250.0, 250.0, 250.0),
    )));
    scene.add_light(Light::Point(PointLight::new(
        Color::ONE,
        1.0,
        Vec3::new(250.0, 150.0, -250.0),
    )));
    scene.add_light(Light::Directional(DirectionalLight::new(
        Color::ONE,
        1.0,
        Vec3::new(-0.65, 0.35, 0.0),
    )));
    scene.add_light(Light::Ambient(AmbientLight::new(Color::ONE, 1.0)));

    scene
}

/// Three pairs of rectangle faces arranged as an exploded cube, with a
/// sphere and a ground plane behind them.
pub fn quasi_cube() -> Scene {
    let camera = Camera::new(Vec3::new(110.0, 105.0, 450.0), Vec3::ZERO, Vec3::Y, 1000.0);
    let mut scene = Scene::new(camera, Color::ZERO);

    let face = Matte::new(Color::new(0.65, 0.35, 0.1))
        .with_ambient(0.3)
        .with_diffuse(1.0);
    let faces = [
        // Front, left, top
        (
            Vec3::new(-25.0, 25.0, 10.0),
            Vec3::new(50.0, 0.0, 0.0),
            Vec3::new(0.0, -50.0, 0.0),
            Vec3::Z,
        ),
        (
            Vec3::new(-35.0, 25.0, 0.0),
            Vec3::new(0.0, 0.0, -50.0),
            Vec3::new(0.0, -50.0, 0.0),
            Vec3::X,
        ),
        (
            Vec3::new(-25.0, 35.0, 0.0),
            Vec3::new(0.0, 0.0, -50.0),
            Vec3::new(50.0, 0.0, 0.0),
            Vec3::NEG_Y,
        ),
        // Back, right, bottom
        (
            Vec3::new(25.0, -25.0, -60.0),
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(0.0, 50.0, 0.0),
            Vec3::NEG_Z,
        ),
        (
            Vec3::new(35.0, -25.0, -50.0),
            Vec3::new(0.0, 50.0, 0.0),
            Vec3::new(0.0, 0.0, 50.0),
            Vec3::NEG_X,
        ),
        (
            Vec3::new(25.0, -35.0, -50.0),
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 50.0),
            Vec3::Y,
        ),
    ];
    for (point, edge_a, edge_b, normal) in faces {
        scene.add_primitive(Shape::rect(point, edge_a, edge_b, normal), face.into());
    }

    scene.add_primitive(
        Shape::sphere(Vec3::new(177.0, 0.0, -150.0), 50.0),
        Glossy::new(Color::new(0.0, 0.75, 0.75))
            .with_ambient(0.3)
            .with_diffuse(0.7)
            .with_specular(0.7, 8.0)
            .into(),
    );
    scene.add_primitive(
        Shape::plane(Vec3::new(0.0, -10.0, 0.0), Vec3::Y),
        Matte::new(Color::new(0.9, 0.9, 0.3)).with_ambient(0.2).into(),
    );

    scene.add_light(Light::Point(PointLight::new(
        Color::ONE,
        1.0,
        Vec3::new(-250.0, 250.0, 250.0),
    )));
    scene.add_light(Light::Ambient(AmbientLight::new(Color::ONE, 0.5)));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        spheres_row().validate().unwrap();
        quasi_cube().validate().unwrap();
    }

    #[test]
    fn test_spheres_row_light_counts() {
        let scene = spheres_row();
        assert_eq!(scene.point_lights().len(), 2);
        assert_eq!(scene.directional_lights().len(), 1);
    }
}
