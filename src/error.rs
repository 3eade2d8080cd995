//! Error type shared by scene construction, configuration and image output.
//!
//! Geometric edge cases (parallel rays, misses, shapes behind the camera) are
//! not errors; they resolve to "no intersection" inside the tracer.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// Everything that can go wrong before or after the pixel loop.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Camera target coincides with its position, or looks straight along
    /// the world up axis so no right vector exists.
    #[error("degenerate camera: position {position:?} looking at {target:?}")]
    DegenerateCamera {
        /// Camera position as supplied.
        position: [f32; 3],
        /// Look-at target as supplied.
        target: [f32; 3],
    },

    /// Image dimensions must both be non-zero.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Light intensity must be a finite, non-negative scalar.
    #[error("invalid light intensity {intensity}")]
    InvalidLight {
        /// Offending intensity.
        intensity: f32,
    },

    /// Output path has an extension the pixel sink cannot write.
    #[error("unsupported output format '{0}', expected .png or .exr")]
    UnsupportedFormat(String),

    /// PNG encoding or file write failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding or file write failed.
    #[error("failed to write EXR image: {0}")]
    Exr(#[from] exr::error::Error),

    /// Render settings file could not be parsed.
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Dedicated render thread pool could not be started.
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Generic I/O failure, e.g. reading a config file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
