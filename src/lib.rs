//! Prismcast ray caster
//!
//! Casts one ray per pixel from a pinhole camera into a list of spheres and
//! planes, shades the nearest hit with a single point light and hard shadows,
//! and writes the result as PNG or EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod hittable;
pub mod light;
pub mod output;
pub mod plane;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;

pub use camera::Camera;
pub use color::Color;
pub use error::{RenderError, Result};
pub use grid::PixelGrid;
pub use hittable::{Hittable, Shape, NO_HIT};
pub use light::Light;
pub use plane::Plane;
pub use ray::Ray;
pub use renderer::{RenderOptions, Renderer};
pub use scene::{Hit, Scene};
pub use sphere::Sphere;

/// Render `scene` and save it to `output_path`.
///
/// The grid is returned on success so callers can hand it to other sinks;
/// any failure to write the file is returned as is.
pub fn render(scene: &Scene, options: RenderOptions, output_path: impl AsRef<Path>) -> Result<PixelGrid> {
    let grid = Renderer::new(options).render(scene)?;
    output::save_image(&grid, output_path)?;
    Ok(grid)
}
