//! Lux viewer: renders a demo scene preset to a PNG file.
//!
//! Usage: `lux_viewer [preset] [output.png] [--sequential]`
//! Presets: `spheres_row` (default), `quasi_cube`.

mod scenes;

use anyhow::{bail, Context, Result};
use lux_renderer::{render_parallel, render_sequential, Color, ImageBuffer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut sequential = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--sequential" {
            sequential = true;
        } else {
            positional.push(arg);
        }
    }
    let preset = positional.first().map(String::as_str).unwrap_or("spheres_row");
    let output = positional.get(1).map(String::as_str).unwrap_or("render.png");

    let scene = match preset {
        "spheres_row" => scenes::spheres_row(),
        "quasi_cube" => scenes::quasi_cube(),
        other => bail!("unknown preset '{other}' (try spheres_row or quasi_cube)"),
    };

    let config = RenderConfig {
        width: 960,
        height: 600,
        samples_per_pixel: 16,
        sample_groups: 79,
    };

    let mut rng = StdRng::from_entropy();
    let mut sampler = config.sampler(&mut rng)?;

    log::info!(
        "rendering preset '{}' ({}x{}, {} spp, {})",
        preset,
        config.width,
        config.height,
        config.samples_per_pixel,
        if sequential { "sequential" } else { "parallel" }
    );
    let start = std::time::Instant::now();
    let image = if sequential {
        render_sequential(&scene, &config, &mut sampler, &mut rng)?
    } else {
        render_parallel(&scene, &config, &sampler, &mut rng)?
    };
    log::info!("render finished in {:?}", start.elapsed());

    save_png(&image, output).with_context(|| format!("writing {output}"))?;
    log::info!("saved {output}");
    Ok(())
}

/// Quantize one linear color to 8-bit channels.
///
/// When a channel exceeds 1.0 the whole color is divided by its largest
/// channel, preserving hue instead of clipping it.
fn pixel_rgb(color: Color) -> [u8; 3] {
    let max = color.x.max(color.y).max(color.z);
    let scaled = if max > 1.0 { color / max } else { color };
    [
        (scaled.x * 255.0) as u8,
        (scaled.y * 255.0) as u8,
        (scaled.z * 255.0) as u8,
    ]
}

fn save_png(image: &ImageBuffer, path: &str) -> Result<()> {
    let mut out = image::RgbImage::new(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            // Buffer row 0 is the bottom of the image; PNG rows go top-down.
            let color = image.get(x, image.height - 1 - y);
            out.put_pixel(x, y, image::Rgb(pixel_rgb(color)));
        }
    }
    out.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
