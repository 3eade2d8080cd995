use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3A;
use log::info;

mod cli;
mod logger;

use cli::{Args, DEFAULT_CONFIG};
use logger::init_logger;
use prismcast::config::Config;
use prismcast::output::{save_image, send_image_to_tev};
use prismcast::{Camera, Color, Light, Plane, Renderer, Scene, Shape, Sphere};

/// Built-in scene: a red sphere up and to the right, a larger blue sphere
/// hovering over a grey floor, one light overhead.
fn create_scene(width: u32, height: u32) -> prismcast::Result<Scene> {
    let shapes: Vec<Shape> = vec![
        Sphere::new(Vec3A::new(2.0, 2.0, -10.0), 1.0, Color::rgb(220, 40, 40)).into(),
        Sphere::new(Vec3A::new(-1.5, -1.0, -8.0), 1.5, Color::rgb(40, 90, 220)).into(),
        Plane::new(Vec3A::new(0.0, -3.0, 0.0), Vec3A::Y, Color::rgb(170, 170, 160)).into(),
    ];

    let camera = Camera::look_at(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0))?;
    let light = Light::new(Vec3A::new(0.0, 10.0, -2.0), 1.0)?;

    Scene::new(width, height, Color::TRANSPARENT, camera, light, shapes)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("Prismcast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("reading {}", path.display()))?,
        None => Config::load_or_default(DEFAULT_CONFIG).context("reading default config.toml")?,
    };
    let settings = args.settings(&config);

    info!("Image resolution: {}x{}", settings.width, settings.height);

    let scene = create_scene(settings.width, settings.height).context("building scene")?;
    let grid = Renderer::new(settings.options)
        .render(&scene)
        .context("rendering scene")?;

    if let Some(address) = args.tev_target() {
        send_image_to_tev(&grid, address);
    }

    save_image(&grid, &settings.output)
        .with_context(|| format!("saving {}", settings.output.display()))?;

    Ok(())
}
