// this_file: src/canvas.rs

//! Caller-owned pixel storage for glyph compositing.

use serde::{Deserialize, Serialize};

/// Raw pixel layout of a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// One coverage byte per pixel.
    Alpha8,
    /// Four bytes per pixel, RGBA ordering.
    Rgba8,
}

impl PixelFormat {
    /// Bytes occupied by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Alpha8 => 1,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Packed row-major pixel buffer owned by the caller.
///
/// Glyph masks are composited in place by
/// [`Face::render_into`](crate::Face::render_into); only
/// [`PixelFormat::Alpha8`] canvases accept masks.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a zeroed single-channel coverage canvas.
    pub fn alpha8(width: u32, height: u32) -> Self {
        Self::new(width, height, PixelFormat::Alpha8)
    }

    /// Allocate a zeroed RGBA canvas.
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self::new(width, height, PixelFormat::Rgba8)
    }

    fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let len = width as usize * height as usize * format.bytes_per_pixel();
        Self {
            width,
            height,
            format,
            data: vec![0; len],
        }
    }

    /// Wrap existing pixel storage.
    ///
    /// `data` must hold `width * height` pixels in `format`'s packing.
    pub fn from_data(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * format.bytes_per_pixel()
        );
        Self {
            width,
            height,
            format,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Consume the canvas into RGBA bytes.
    ///
    /// An `Alpha8` canvas expands each coverage byte into an opaque gray
    /// pixel, which is what downstream image encoders expect; an `Rgba8`
    /// canvas is returned as-is.
    pub fn into_rgba(self) -> Vec<u8> {
        match self.format {
            PixelFormat::Rgba8 => self.data,
            PixelFormat::Alpha8 => {
                let mut rgba = Vec::with_capacity(self.data.len() * 4);
                for &value in &self.data {
                    rgba.extend_from_slice(&[value, value, value, 255]);
                }
                rgba
            }
        }
    }
}
