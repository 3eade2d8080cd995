//! # Output Module
//!
//! Persists a finished [`PixelGrid`]:
//! - PNG: lossless 8-bit RGBA, the default
//! - EXR: channels converted to linear `[0, 1]` floats
//!
//! It can also push the grid to a running TEV viewer for a quick look. TEV
//! problems are only logged; file output errors are returned to the caller.

use std::net::TcpStream;
use std::path::Path;

use exr::prelude::write_rgba_file;
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

use crate::error::{RenderError, Result};
use crate::grid::PixelGrid;

/// Port TEV listens on by default.
pub const TEV_DEFAULT_PORT: u16 = 14158;

const TEV_IMAGE_NAME: &str = "prismcast_output";
const TEV_CHANNELS: [&str; 4] = ["R", "G", "B", "A"];

/// Save `grid` to `path`, picking the encoder from the file extension.
///
/// `.png` and `.exr` are supported (case-insensitive); anything else fails
/// with [`RenderError::UnsupportedFormat`] before touching the filesystem.
pub fn save_image(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_image_as_png(grid, path),
        "exr" => save_image_as_exr(grid, path),
        _ => Err(RenderError::UnsupportedFormat(extension)),
    }
}

/// Save `grid` as an 8-bit RGBA PNG.
pub fn save_image_as_png(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    grid.to_rgba_image().save(path)?;
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save `grid` as an RGBA EXR with channels mapped to `[0, 1]`.
///
/// No gamma or tone mapping is applied; 255 maps to 1.0.
pub fn save_image_as_exr(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let width = grid.width() as usize;

    write_rgba_file(path, width, grid.height() as usize, |x, y| {
        let [r, g, b, a] = grid.pixels()[y * width + x].to_linear_rgba();
        (r, g, b, a)
    })?;

    info!("Image saved as EXR: {}", path.display());
    Ok(())
}

/// Send `grid` to a TEV viewer at `tev_address` (`host:port`, or just a host
/// for the default port).
///
/// Connection or protocol failures are logged as warnings and otherwise
/// ignored, since previewing must never fail a render.
pub fn send_image_to_tev(grid: &PixelGrid, tev_address: &str) {
    let tev_address = tev_address_with_port(tev_address);
    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let (width, height) = (grid.width(), grid.height());
    let create_packet = PacketCreateImage {
        image_name: TEV_IMAGE_NAME,
        width,
        height,
        channel_names: &TEV_CHANNELS,
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    let data = planar_channels(grid);
    let pixel_count = grid.pixels().len() as u64;
    debug!(
        "Sending {} pixels to TEV ({:.1} MB)",
        pixel_count,
        data.len() as f32 * 4.0 / 1_000_000.0
    );

    let start_time = std::time::Instant::now();
    let update_packet = PacketUpdateImage {
        image_name: TEV_IMAGE_NAME,
        grab_focus: false,
        channel_names: &TEV_CHANNELS,
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, pixel_count, 2 * pixel_count, 3 * pixel_count],
        channel_strides: &[1, 1, 1, 1],
        data: &data,
    };
    match client.send(update_packet) {
        Ok(_) => info!(
            "Image data sent to TEV at {} in {:.2?}",
            tev_address,
            start_time.elapsed()
        ),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}

fn tev_address_with_port(address: &str) -> String {
    if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, TEV_DEFAULT_PORT)
    }
}

/// Interleaved RGBA to planar RRR...GGG...BBB...AAA... floats, as TEV expects.
fn planar_channels(grid: &PixelGrid) -> Vec<f32> {
    let linear: Vec<[f32; 4]> = grid.pixels().iter().map(|c| c.to_linear_rgba()).collect();
    (0..4)
        .flat_map(|channel| linear.iter().map(move |px| px[channel]))
        .collect()
}
