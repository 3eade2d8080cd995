//! Render settings loaded from a TOML file.
//!
//! Only settings live here: image size, output path, threading and shading
//! options. Scene geometry is always built in code.
//!
//! ```toml
//! [render]
//! width = 640
//! height = 480
//! output = "output.png"
//! threads = 8
//! band_height = 16
//!
//! [shading]
//! shadow_bias = 0.0
//! clamp_reflect = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RenderError, Result};
use crate::renderer::RenderOptions;

/// Image size and output settings.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
    /// Output file, `.png` or `.exr`.
    pub output: Option<PathBuf>,
    /// Dedicated thread pool size.
    pub threads: Option<usize>,
    /// Rows per parallel work unit.
    pub band_height: Option<u32>,
}

/// Opt-in fixes to the shading pipeline.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShadingSection {
    /// Shadow-ray origin offset toward the light.
    pub shadow_bias: Option<f32>,
    /// Clamp reflect intensities above 1.
    pub clamp_reflect: Option<bool>,
}

/// Contents of a settings file. Every field is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// `[render]` table.
    #[serde(default)]
    pub render: RenderSection,
    /// `[shading]` table.
    #[serde(default)]
    pub shading: ShadingSection,
}

impl Config {
    /// Parse settings from TOML text. `path` is only used in errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| RenderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply the file's values on top of `options`.
    pub fn apply(&self, options: &mut RenderOptions) {
        if let Some(threads) = self.render.threads {
            options.threads = Some(threads);
        }
        if let Some(band_height) = self.render.band_height {
            options.band_height = band_height;
        }
        if let Some(bias) = self.shading.shadow_bias {
            options.shadow_bias = bias;
        }
        if let Some(clamp) = self.shading.clamp_reflect {
            options.clamp_reflect = clamp;
        }
    }
}
