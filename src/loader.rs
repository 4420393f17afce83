//! Image decoding and display fitting.
//!
//! Produces the [`PixelBuffer`] a session samples from. Large images are
//! scaled down to the configured maximum display size first, so selections
//! drawn on the fitted image average exactly the pixels that are shown.

use crate::config::CanvasConfig;
use crate::sample::PixelBuffer;
use image::imageops::{self, FilterType};
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading an image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("image not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} has no pixels", .path.display())]
    Empty { path: PathBuf },
}

/// Decodes the image at `path` and fits it per `canvas`.
///
/// # Errors
/// Returns an error if the file does not exist, cannot be decoded, or has a
/// zero dimension.
pub fn load_image(path: &Path, canvas: &CanvasConfig) -> Result<PixelBuffer, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width == 0 || height == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!("Decoded {} ({}x{})", path.display(), width, height);

    if !canvas.fit_to_display {
        return Ok(PixelBuffer::from(rgba));
    }

    let (fit_width, fit_height) =
        fit_dimensions(width, height, canvas.max_width, canvas.max_height);
    if (fit_width, fit_height) == (width, height) {
        return Ok(PixelBuffer::from(rgba));
    }

    debug!("Fitting image to {fit_width}x{fit_height}");
    let resized = imageops::resize(&rgba, fit_width, fit_height, FilterType::Triangle);
    Ok(PixelBuffer::from(resized))
}

/// Scales `width`x`height` down to fit inside `max_width`x`max_height`.
///
/// Width is limited first, then height, each step keeping the aspect ratio.
/// Fractional results are truncated, never below one pixel. Images that
/// already fit are returned unchanged (never scaled up).
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let mut w = f64::from(width);
    let mut h = f64::from(height);
    let max_w = f64::from(max_width.max(1));
    let max_h = f64::from(max_height.max(1));

    if w > max_w {
        h *= max_w / w;
        w = max_w;
    }
    if h > max_h {
        w *= max_h / h;
        h = max_h;
    }

    ((w as u32).max(1), (h as u32).max(1))
}
