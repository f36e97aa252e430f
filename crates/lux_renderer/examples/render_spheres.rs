//! Minimal sequential render example.
//!
//! Renders two spheres over a ground plane and saves the result as PPM.

use lux_renderer::{
    render_sequential, Camera, Color, DirectionalLight, Light, Matte, PointLight, RenderConfig,
    Scene, Shape, Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    let mut scene = Scene::new(
        Camera::new(Vec3::new(120.0, 75.0, 450.0), Vec3::ZERO, Vec3::Y, 400.0),
        Color::ZERO,
    );
    scene.add_primitive(
        Shape::sphere(Vec3::ZERO, 100.0),
        Matte::new(Color::new(0.8, 0.3, 0.3)).with_ambient(0.2).into(),
    );
    scene.add_primitive(
        Shape::sphere(Vec3::new(177.0, 0.0, -150.0), 50.0),
        Matte::new(Color::new(0.3, 0.3, 0.8)).with_ambient(0.2).into(),
    );
    scene.add_primitive(
        Shape::plane(Vec3::new(0.0, -10.0, 0.0), Vec3::Y),
        Matte::new(Color::new(0.9, 0.9, 0.2)).with_ambient(0.2).into(),
    );
    scene.add_light(Light::Point(PointLight::new(
        Color::ONE,
        1.5,
        Vec3::new(-250.0, 250.0, 250.0),
    )));
    scene.add_light(Light::Directional(DirectionalLight::new(
        Color::ONE,
        0.5,
        Vec3::new(-0.65, 0.35, 0.0),
    )));

    let config = RenderConfig {
        width: 320,
        height: 200,
        samples_per_pixel: 16,
        sample_groups: 16,
    };

    let mut rng = rand::thread_rng();
    let mut sampler = config.sampler(&mut rng).expect("sampler config");

    println!(
        "Rendering {}x{} @ {} spp...",
        config.width, config.height, config.samples_per_pixel
    );
    let start = std::time::Instant::now();
    let image = render_sequential(&scene, &config, &mut sampler, &mut rng).expect("render");
    println!("Rendered in {:?}", start.elapsed());

    save_ppm(&image, "spheres.ppm").expect("Failed to save image");
    println!("Saved to spheres.ppm");
}

fn save_ppm(image: &lux_renderer::ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    // Buffer rows start at the bottom of the image; PPM wants the top first.
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let color = image.get(x, y);
            let max = color.x.max(color.y).max(color.z);
            let scaled = if max > 1.0 { color / max } else { color };
            writeln!(
                writer,
                "{} {} {}",
                (scaled.x * 255.0) as u8,
                (scaled.y * 255.0) as u8,
                (scaled.z * 255.0) as u8
            )?;
        }
    }

    Ok(())
}
