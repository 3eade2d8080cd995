use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use prismcast::config::Config;
use prismcast::RenderOptions;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_OUTPUT: &str = "output.png";
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "prismcast")]
#[command(about = "Casts one ray per pixel through a small sphere and plane scene")]
pub struct Args {
    /// Render settings file; `config.toml` is read when present
    #[arg(short, long, help = "Render settings file (TOML)")]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, help = "Image width in pixels [default: 640]")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, help = "Image height in pixels [default: 480]")]
    pub height: Option<u32>,

    /// Output file path (.png for 8-bit RGBA, .exr for linear floats)
    #[arg(short, long, help = "Output file path, .png or .exr [default: output.png]")]
    pub output: Option<PathBuf>,

    /// Size of the render thread pool
    #[arg(short = 'j', long, help = "Render threads [default: all cores]")]
    pub threads: Option<usize>,

    /// Rows per parallel work unit
    #[arg(long, help = "Rows per parallel work unit [default: 16]")]
    pub band_height: Option<u32>,

    /// Push shadow-ray origins toward the light by this distance
    #[arg(long, help = "Offset shadow-ray origins toward the light [default: 0]")]
    pub shadow_bias: Option<f32>,

    /// Clamp reflect intensities above 1 instead of drawing background
    #[arg(long, help = "Clamp reflect intensities above 1 instead of drawing background")]
    pub clamp_reflect: bool,

    /// Send image to TEV for visualization
    #[arg(long, help = "Send image to TEV for visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,
}

/// Everything `main` needs once the command line and settings file agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub options: RenderOptions,
}

impl Args {
    /// Merge command line values over the settings file over the defaults.
    pub fn settings(&self, config: &Config) -> Settings {
        let mut options = RenderOptions::default();
        config.apply(&mut options);

        if let Some(threads) = self.threads {
            options.threads = Some(threads);
        }
        if let Some(band_height) = self.band_height {
            options.band_height = band_height;
        }
        if let Some(bias) = self.shadow_bias {
            options.shadow_bias = bias;
        }
        if self.clamp_reflect {
            options.clamp_reflect = true;
        }
        if self.no_progress {
            options.progress = false;
        }

        Settings {
            width: self.width.or(config.render.width).unwrap_or(DEFAULT_WIDTH),
            height: self.height.or(config.render.height).unwrap_or(DEFAULT_HEIGHT),
            output: self
                .output
                .clone()
                .or_else(|| config.render.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            options,
        }
    }

    /// TEV address to send to, if TEV output was requested.
    pub fn tev_target(&self) -> Option<&str> {
        match (&self.tev_address, self.tev) {
            (Some(address), _) => Some(address),
            (None, true) => Some("localhost"),
            (None, false) => None,
        }
    }
}
