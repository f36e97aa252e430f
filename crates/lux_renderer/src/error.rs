//! Error types for scene validation and render configuration.

use thiserror::Error;

/// Fatal, pre-render failures.
///
/// A render either completes as one batch or fails with one of these;
/// there is no partial or recoverable render state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("samples per pixel must be a perfect square, got {0}")]
    NonSquareSampleCount(usize),

    #[error("at least one sample group is required")]
    NoSampleGroups,

    #[error("sampler was built for {sampler} samples per pixel, render config wants {config}")]
    SamplerMismatch { sampler: usize, config: usize },

    #[error("camera basis is degenerate (eye and look-at coincide, or up is unusable)")]
    DegenerateCamera,

    #[error("degenerate primitive: {0}")]
    DegeneratePrimitive(String),
}
