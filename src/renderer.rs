//! Per-pixel shading and the parallel render loop.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::grid::PixelGrid;
use crate::hittable::Hittable;
use crate::scene::Scene;

/// Knobs for a render. The defaults reproduce the plain pipeline exactly:
/// no shadow-ray offset and background for out-of-range reflect terms.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Distance the shadow-ray origin is pushed toward the light.
    pub shadow_bias: f32,
    /// Clamp reflect intensities above 1 instead of emitting background.
    pub clamp_reflect: bool,
    /// Rows per unit of parallel work.
    pub band_height: u32,
    /// Size of a dedicated thread pool; `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            shadow_bias: 0.0,
            clamp_reflect: false,
            band_height: 16,
            threads: None,
            progress: true,
        }
    }
}

/// Casts one ray per pixel and shades the nearest hit.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render every pixel of `scene` into a new grid.
    ///
    /// Camera-space pixel `(x, y)`, with `y` counted from the bottom, is
    /// stored at grid row `height - y - 1`. Rows are split into bands of
    /// [`RenderOptions::band_height`] and each band is filled by one worker.
    ///
    /// Fails with [`RenderError::InvalidDimensions`] when the scene has no
    /// pixels, which can happen when its fields were set directly.
    pub fn render(&self, scene: &Scene) -> Result<PixelGrid> {
        if scene.width == 0 || scene.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: scene.width,
                height: scene.height,
            });
        }

        let mut grid = PixelGrid::new(scene.width, scene.height, scene.background);
        let width = scene.width as usize;
        let band_rows = self.options.band_height.max(1) as usize;

        debug!("Render options: {:?}", self.options);

        let pb = if self.options.progress {
            ProgressBar::new(scene.height as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            pb.set_style(style);
        }

        let fill = |pixels: &mut [Color]| {
            info!(
                "Generating {}x{} image with {} shapes using {} threads...",
                scene.width,
                scene.height,
                scene.shapes.len(),
                rayon::current_num_threads()
            );
            pixels
                .par_chunks_mut(width * band_rows)
                .enumerate()
                .for_each(|(band, chunk)| {
                    for (offset, row_pixels) in chunk.chunks_mut(width).enumerate() {
                        let row = (band * band_rows + offset) as u32;
                        let y = scene.height - row - 1;
                        for (x, pixel) in row_pixels.iter_mut().enumerate() {
                            *pixel = self.shade_pixel(scene, x as u32, y);
                        }
                        pb.inc(1);
                    }
                });
        };

        let generation_start = std::time::Instant::now();
        match self.options.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
                pool.install(|| fill(grid.pixels_mut()));
            }
            None => fill(grid.pixels_mut()),
        }
        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        Ok(grid)
    }

    /// Color of camera-space pixel `(x, y)`, `y` counted from the bottom.
    pub fn shade_pixel(&self, scene: &Scene, x: u32, y: u32) -> Color {
        let ray = scene.camera.ray_for_pixel(x, y, scene.width, scene.height);

        let Some(hit) = scene.nearest_hit(&ray) else {
            return scene.background;
        };

        let shape = &scene.shapes[hit.index];
        let hit_point = ray.at(hit.distance);
        let normal = shape.normal_at(hit_point);
        let light_direction = (scene.light.position - hit_point).normalize_or_zero();

        // Absolute value: front and back faces are lit alike
        let Some(reflect) = self.reflect_intensity(light_direction.dot(normal).abs()) else {
            return scene.background;
        };

        if scene.is_blocked(hit_point, hit.index, self.options.shadow_bias) {
            return Color::BLACK;
        }

        shape.color().scale(scene.light.intensity * reflect)
    }

    /// `None` means the pixel falls back to background.
    fn reflect_intensity(&self, reflect: f32) -> Option<f32> {
        if reflect > 1.0 {
            self.options.clamp_reflect.then_some(1.0)
        } else {
            Some(reflect)
        }
    }
}

#[cfg(test)]
mod test {
    use glam::Vec3A;

    use super::*;
    use crate::camera::Camera;
    use crate::hittable::Shape;
    use crate::light::Light;
    use crate::plane::Plane;
    use crate::sphere::Sphere;

    const WALL: Color = Color::rgb(200, 100, 50);

    fn quiet() -> RenderOptions {
        RenderOptions {
            progress: false,
            ..Default::default()
        }
    }

    fn scene(light: Vec3A, intensity: f32, shapes: Vec<Shape>) -> Scene {
        let camera = Camera::look_at(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0)).unwrap();
        let light = Light::new(light, intensity).unwrap();
        Scene::new(64, 48, Color::TRANSPARENT, camera, light, shapes).unwrap()
    }

    fn wall() -> Shape {
        Plane::new(Vec3A::new(0.0, 0.0, -10.0), Vec3A::Z, WALL).into()
    }

    #[test]
    fn test_light_on_axis_scales_color_by_intensity() {
        let scene = scene(Vec3A::new(0.0, 0.0, -2.0), 0.5, vec![wall()]);
        let color = Renderer::new(quiet()).shade_pixel(&scene, 32, 24);
        assert_eq!(color, Color::rgb(100, 50, 25));
    }

    #[test]
    fn test_back_face_lit_like_front_face() {
        // light sits behind the wall, opposite the normal
        let scene = scene(Vec3A::new(0.0, 0.0, -12.0), 1.0, vec![wall()]);
        let color = Renderer::new(quiet()).shade_pixel(&scene, 32, 24);
        assert_eq!(color, WALL);
    }

    #[test]
    fn test_occluded_pixel_is_black() {
        let light = Vec3A::new(10.0, 0.0, -2.0);
        let occluder = Sphere::new(Vec3A::new(5.0, 0.0, -6.0), 1.0, Color::rgb(0, 0, 255));
        let renderer = Renderer::new(quiet());

        let open = scene(light, 1.0, vec![wall()]);
        let lit = renderer.shade_pixel(&open, 32, 24);
        assert_ne!(lit, Color::BLACK);
        assert_ne!(lit, open.background);
        // cos = 8 / |(10, 0, 8)|
        assert_eq!(lit, WALL.scale(8.0 / 164.0f32.sqrt()));

        let shadowed = scene(light, 1.0, vec![wall(), occluder.into()]);
        assert_eq!(renderer.shade_pixel(&shadowed, 32, 24), Color::BLACK);
    }

    #[test]
    fn test_miss_is_background() {
        let mut scene = scene(Vec3A::Y, 1.0, vec![Sphere::new(Vec3A::new(0.0, 0.0, -10.0), 1.0, WALL).into()]);
        scene.background = Color::argb(255, 1, 2, 3);
        assert_eq!(Renderer::new(quiet()).shade_pixel(&scene, 0, 0), Color::argb(255, 1, 2, 3));
    }

    #[test]
    fn test_reflect_above_one_falls_back_to_background() {
        let renderer = Renderer::new(quiet());
        assert_eq!(renderer.reflect_intensity(1.0), Some(1.0));
        assert_eq!(renderer.reflect_intensity(0.25), Some(0.25));
        assert_eq!(renderer.reflect_intensity(1.000_001), None);
    }

    #[test]
    fn test_clamp_reflect_option() {
        let renderer = Renderer::new(RenderOptions {
            clamp_reflect: true,
            ..quiet()
        });
        assert_eq!(renderer.reflect_intensity(1.000_001), Some(1.0));
        assert_eq!(renderer.reflect_intensity(0.25), Some(0.25));
    }

    #[test]
    fn test_empty_scene_is_all_background() {
        let scene = scene(Vec3A::Y, 1.0, vec![]);
        let grid = Renderer::new(quiet()).render(&scene).unwrap();
        assert_eq!(grid.width(), 64);
        assert_eq!(grid.height(), 48);
        assert!(grid.pixels().iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn test_zero_sized_scene_is_rejected() {
        let mut flat = scene(Vec3A::Y, 1.0, vec![wall()]);
        flat.width = 0;
        let err = Renderer::new(quiet()).render(&flat).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { width: 0, height: 48 }));

        let camera = Camera::look_at(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0)).unwrap();
        let literal = Scene {
            shapes: vec![],
            light: Light::new(Vec3A::Y, 1.0).unwrap(),
            camera,
            background: Color::TRANSPARENT,
            width: 4,
            height: 0,
        };
        let err = Renderer::new(quiet()).render(&literal).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { width: 4, height: 0 }));
    }

    #[test]
    fn test_render_flips_rows() {
        let scene = scene(
            Vec3A::new(0.0, 0.0, -2.0),
            1.0,
            vec![
                wall(),
                Sphere::new(Vec3A::new(-2.0, 1.5, -8.0), 1.0, Color::rgb(0, 255, 0)).into(),
            ],
        );
        let renderer = Renderer::new(quiet());
        let grid = renderer.render(&scene).unwrap();

        for y in 0..scene.height {
            for x in 0..scene.width {
                assert_eq!(grid.get(x, scene.height - y - 1), renderer.shade_pixel(&scene, x, y));
            }
        }
    }

    #[test]
    fn test_band_layout_does_not_change_image() {
        let scene = scene(
            Vec3A::new(10.0, 0.0, -2.0),
            1.0,
            vec![wall(), Sphere::new(Vec3A::new(5.0, 0.0, -6.0), 1.0, Color::rgb(0, 0, 255)).into()],
        );
        let reference = Renderer::new(RenderOptions {
            band_height: 1,
            threads: Some(1),
            ..quiet()
        })
        .render(&scene)
        .unwrap();

        for (band_height, threads) in [(7, Some(3)), (48, None), (100, Some(2)), (0, None)] {
            let grid = Renderer::new(RenderOptions {
                band_height,
                threads,
                ..quiet()
            })
            .render(&scene)
            .unwrap();
            assert_eq!(grid, reference, "band_height {band_height}, threads {threads:?}");
        }
    }
}
