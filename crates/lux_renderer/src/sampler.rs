//! Stratified jittered sample generation and consumption.
//!
//! Samples are organized into independent groups; each group jitters one
//! point into every cell of a square grid and owns a random permutation
//! that decorrelates consumption order across pixels sharing the group.

use crate::error::RenderError;
use lux_math::{Vec2, Vec3};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::f32::consts::{FRAC_PI_4, TAU};

#[derive(Debug, Clone)]
pub struct Sampler {
    /// Group-major sample points, `samples_per_pixel` per group.
    samples: Vec<Vec2>,
    /// Group-major index permutations, one per group.
    indices: Vec<usize>,
    samples_per_pixel: usize,
    num_groups: usize,
    /// Sequential-consumption cursor. Only the sequential render strategy
    /// touches these two fields.
    counter: usize,
    offset: usize,
}

impl Sampler {
    /// Generate `num_groups` stratified groups of `samples_per_pixel`
    /// jittered samples each.
    ///
    /// `samples_per_pixel` must be a perfect square so the pixel's sample
    /// square divides into an even grid.
    pub fn new(
        samples_per_pixel: usize,
        num_groups: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Self, RenderError> {
        let grid = (samples_per_pixel as f64).sqrt() as usize;
        if grid * grid != samples_per_pixel || samples_per_pixel == 0 {
            return Err(RenderError::NonSquareSampleCount(samples_per_pixel));
        }
        if num_groups == 0 {
            return Err(RenderError::NoSampleGroups);
        }

        let mut samples = Vec::with_capacity(samples_per_pixel * num_groups);
        for _ in 0..num_groups {
            for row in 0..grid {
                for col in 0..grid {
                    samples.push(Vec2::new(
                        (col as f32 + rng.gen::<f32>()) / grid as f32,
                        (row as f32 + rng.gen::<f32>()) / grid as f32,
                    ));
                }
            }
        }

        let mut indices = Vec::with_capacity(samples_per_pixel * num_groups);
        let mut permutation: Vec<usize> = (0..samples_per_pixel).collect();
        for _ in 0..num_groups {
            permutation.shuffle(rng);
            indices.extend_from_slice(&permutation);
        }

        Ok(Self {
            samples,
            indices,
            samples_per_pixel,
            num_groups,
            counter: 0,
            offset: 0,
        })
    }

    pub fn samples_per_pixel(&self) -> usize {
        self.samples_per_pixel
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Next sample on the unit square, in stateful sequential order.
    ///
    /// Hops to a freshly drawn group every `samples_per_pixel` draws, then
    /// walks that group through its permutation. One sampler instance
    /// serves one sequential render.
    pub fn next_square_sample(&mut self, rng: &mut dyn RngCore) -> Vec2 {
        let n = self.samples_per_pixel;
        if self.counter % n == 0 {
            self.offset = rng.gen_range(0..self.num_groups) * n;
        }
        let i = self.counter % n;
        self.counter += 1;
        self.samples[self.offset + self.indices[self.offset + i]]
    }

    /// The `i`-th sample of `group`, read through the group's permutation.
    ///
    /// Stateless; this is the parallel strategy's accessor and yields the
    /// same stream `next_square_sample` would for that group.
    pub fn sample(&self, group: usize, i: usize) -> Vec2 {
        let base = group * self.samples_per_pixel;
        self.samples[base + self.indices[base + i]]
    }

    /// Draw one independent group index per output pixel, host-side,
    /// before a parallel dispatch.
    pub fn draw_group_offsets(&self, pixel_count: usize, rng: &mut dyn RngCore) -> Vec<usize> {
        (0..pixel_count)
            .map(|_| rng.gen_range(0..self.num_groups))
            .collect()
    }

    /// All samples remapped to the unit disc with Shirley's concentric map.
    ///
    /// Utility transform for lens and disc-shaped lobes; the baseline
    /// pipeline does not consume it.
    pub fn map_to_unit_disc(&self) -> Vec<Vec2> {
        self.samples
            .iter()
            .map(|sample| {
                let x = 2.0 * sample.x - 1.0;
                let y = 2.0 * sample.y - 1.0;
                let (radius, sector) = if x > -y {
                    if x > y {
                        (x, y / x)
                    } else {
                        (y, 2.0 - x / y)
                    }
                } else if x < y {
                    (-x, 4.0 + y / x)
                } else if y != 0.0 {
                    (-y, 6.0 - x / y)
                } else {
                    (-y, 0.0)
                };
                let angle = sector * FRAC_PI_4;
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    /// All samples remapped onto the cosine-power-weighted hemisphere
    /// around +Z, with exponent `e`.
    ///
    /// Utility transform for future hemisphere-sampling BRDFs; the
    /// baseline pipeline does not consume it.
    pub fn map_to_hemisphere(&self, e: f32) -> Vec<Vec3> {
        self.samples
            .iter()
            .map(|sample| {
                let azimuth = TAU * sample.x;
                let cos_polar = (1.0 - sample.y).powf(1.0 / (1.0 + e));
                let sin_polar = (1.0 - cos_polar * cos_polar).sqrt();
                Vec3::new(
                    sin_polar * azimuth.cos(),
                    sin_polar * azimuth.sin(),
                    cos_polar,
                )
            })
            .collect()
    }
}
