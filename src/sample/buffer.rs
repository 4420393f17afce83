//! Immutable RGBA pixel snapshot.

use crate::draw::Rgb;
use image::RgbaImage;
use thiserror::Error;

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

/// Errors raised when constructing a [`PixelBuffer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("pixel data has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("buffer dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },
}

/// Decoded pixels of the current image at its fitted size.
///
/// Row-major RGBA bytes, four per pixel. The buffer is never mutated after
/// construction; loading a new image or refitting replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes, validating the length against the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(BufferError::TooLarge { width, height })?;

        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a buffer filled by `f(x, y)`, with full opacity.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                data.extend_from_slice(&[c.r, c.g, c.b, 255]);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer of a single uniform color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Color channels of the pixel at `(x, y)`; alpha is dropped.
    ///
    /// Returns `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.data[index..index + 3];
        Some(Rgb::new(px[0], px[1], px[2]))
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn from_rgba_rejects_wrong_length() {
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn pixel_reads_row_major_and_ignores_alpha() {
        let data = vec![
            1, 2, 3, 0, //
            4, 5, 6, 128, //
            7, 8, 9, 255, //
            10, 11, 12, 255,
        ];
        let buffer = PixelBuffer::from_rgba(2, 2, data).unwrap();
        assert_eq!(buffer.pixel(1, 0), Some(Rgb::new(4, 5, 6)));
        assert_eq!(buffer.pixel(0, 1), Some(Rgb::new(7, 8, 9)));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }

    #[test]
    fn converts_from_rgba_image() {
        let image = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 9, 255]));
        let buffer = PixelBuffer::from(image);
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert_eq!(buffer.pixel(2, 1), Some(Rgb::new(2, 1, 9)));
        assert_eq!(buffer.as_bytes().len(), 24);
    }

    #[test]
    fn empty_buffer_is_valid() {
        let buffer = PixelBuffer::from_rgba(0, 0, Vec::new()).unwrap();
        assert_eq!(buffer.pixel(0, 0), None);
    }
}
