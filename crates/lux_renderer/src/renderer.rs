//! Render orchestration: the sequential per-pixel loop and the
//! data-parallel batch strategy.
//!
//! Both strategies share the camera, sampler, intersection, and shading
//! math; given identical jitter and group-offset inputs they produce the
//! same per-pixel colors.

use crate::error::RenderError;
use crate::flat::FlatScene;
use crate::sampler::Sampler;
use crate::scene::Scene;
use crate::shading::trace;
use crate::Color;
use lux_math::Vec2;
use rand::RngCore;
use rayon::prelude::*;

/// Render configuration accepted by both strategies.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Must be a perfect square.
    pub samples_per_pixel: u32,
    /// Number of independent stratified sample groups.
    pub sample_groups: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 16,
            sample_groups: 79,
        }
    }
}

impl RenderConfig {
    /// Build the sampler this configuration calls for.
    pub fn sampler(&self, rng: &mut dyn RngCore) -> Result<Sampler, RenderError> {
        Sampler::new(
            self.samples_per_pixel as usize,
            self.sample_groups as usize,
            rng,
        )
    }

    fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn check_sampler(&self, sampler: &Sampler) -> Result<(), RenderError> {
        if sampler.samples_per_pixel() != self.samples_per_pixel as usize {
            return Err(RenderError::SamplerMismatch {
                sampler: sampler.samples_per_pixel(),
                config: self.samples_per_pixel as usize,
            });
        }
        Ok(())
    }
}

/// Row-major buffer of linear-space colors, unclamped.
///
/// Row 0 is the bottom image row (the camera's v axis points up); writers
/// that want top-row-first output flip rows.
#[derive(Debug)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Centered pixel-plane coordinate for a jittered sub-pixel sample.
fn pixel_plane_point(col: u32, row: u32, width: u32, height: u32, sample: Vec2) -> Vec2 {
    Vec2::new(
        col as f32 - 0.5 * width as f32 + sample.x,
        row as f32 - 0.5 * height as f32 + sample.y,
    )
}

/// Sequential strategy: a row-major pixel loop consuming the sampler's
/// stateful cursor. Fully deterministic given the RNG's state sequence.
pub fn render_sequential(
    scene: &Scene,
    config: &RenderConfig,
    sampler: &mut Sampler,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    scene.validate()?;
    config.check_sampler(sampler)?;

    let n = config.samples_per_pixel;
    log::info!(
        "sequential render: {}x{} at {} spp",
        config.width,
        config.height,
        n
    );

    let lights = scene.lights();
    let mut image = ImageBuffer::new(config.width, config.height);
    for row in 0..config.height {
        for col in 0..config.width {
            let mut sum = Color::ZERO;
            for _ in 0..n {
                let sample = sampler.next_square_sample(rng);
                let pixel = pixel_plane_point(col, row, config.width, config.height, sample);
                let ray = scene.camera().primary_ray(pixel);
                sum += trace(scene, lights, scene.background(), &ray);
            }
            image.set(col, row, sum / n as f32);
        }
    }
    Ok(image)
}

/// Parallel-batch strategy: flatten the scene, precompute one sample-group
/// offset per pixel, then dispatch one independent unit of work per pixel.
///
/// All randomness is drawn host-side before dispatch, so each unit is a
/// pure function of its pixel index, the flat scene, and the offset table;
/// the rayon join is the single synchronization barrier.
pub fn render_parallel(
    scene: &Scene,
    config: &RenderConfig,
    sampler: &Sampler,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    let offsets = sampler.draw_group_offsets(config.pixel_count(), rng);
    render_parallel_with_offsets(scene, config, sampler, &offsets)
}

/// Deterministic parallel entry: the caller supplies the per-pixel group
/// offsets. [`render_parallel`] draws them; tests pass a replayed table to
/// pin the sample stream.
pub fn render_parallel_with_offsets(
    scene: &Scene,
    config: &RenderConfig,
    sampler: &Sampler,
    offsets: &[usize],
) -> Result<ImageBuffer, RenderError> {
    scene.validate()?;
    config.check_sampler(sampler)?;
    assert_eq!(offsets.len(), config.pixel_count());

    let n = config.samples_per_pixel as usize;
    log::info!(
        "parallel render: {}x{} at {} spp, {} groups",
        config.width,
        config.height,
        n,
        sampler.num_groups()
    );

    let flat = FlatScene::new(scene);
    let width = config.width;
    let height = config.height;
    let pixels: Vec<Color> = (0..config.pixel_count())
        .into_par_iter()
        .map(|index| {
            let col = index as u32 % width;
            let row = index as u32 / width;
            let group = offsets[index];
            let mut sum = Color::ZERO;
            for i in 0..n {
                let sample = sampler.sample(group, i);
                let pixel = pixel_plane_point(col, row, width, height, sample);
                let ray = flat.camera().primary_ray(pixel);
                sum += trace(&flat, flat.lights(), flat.background(), &ray);
            }
            sum / n as f32
        })
        .collect();

    Ok(ImageBuffer {
        width,
        height,
        pixels,
    })
}
