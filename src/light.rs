//! Point light.

use glam::Vec3A;

use crate::error::{RenderError, Result};

/// Single point light with a scalar intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World position of the light.
    pub position: Vec3A,
    /// Brightness multiplier applied to shape colors, never negative.
    pub intensity: f32,
}

impl Light {
    /// Create a light, rejecting negative or non-finite intensities.
    pub fn new(position: Vec3A, intensity: f32) -> Result<Self> {
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(RenderError::InvalidLight { intensity });
        }
        Ok(Self { position, intensity })
    }
}
