//! Owning pixel buffer with bounds-checked 2D access and TGA output.

use super::RasterError;
use crate::color::{self, Color};

/// TGA files start with a fixed 18-byte header.
const TGA_HEADER_LEN: usize = 18;

/// A W x H grid of color cells, stored row-major.
///
/// The canvas is created once per render, mutated in place by the
/// rasterization calls, and read exactly once when serialized. Accesses
/// outside the extent are rejected with [`RasterError::OutOfBounds`],
/// never clamped or wrapped.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas with every cell set to transparent black.
    pub fn new(width: i32, height: i32) -> Result<Self, RasterError> {
        if width <= 0 || height <= 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels: vec![color::TRANSPARENT; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major cell index for (x, y), or `OutOfBounds`.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, RasterError> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as u32 * self.width + x as u32) as usize)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<Color, RasterError> {
        Ok(self.pixels[self.index(x, y)?])
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        let index = self.index(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Overwrite every cell with the given color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Serialize to uncompressed true-color TGA bytes.
    ///
    /// Pixel data is always emitted row-major from y = 0; `vflip` only
    /// flips bit 5 of the image-descriptor byte (top-to-bottom storage),
    /// never the data order. Each pixel is 4 bytes in B,G,R,A order.
    pub fn to_tga_bytes(&self, vflip: bool) -> Vec<u8> {
        let mut header = [0u8; TGA_HEADER_LEN];
        header[2] = 2; // uncompressed true-color
        header[12..14].copy_from_slice(&(self.width as u16).to_le_bytes());
        header[14..16].copy_from_slice(&(self.height as u16).to_le_bytes());
        header[16] = 32; // bits per pixel
        header[17] = if vflip { 0x28 } else { 0x08 };

        let mut bytes = Vec::with_capacity(TGA_HEADER_LEN + self.pixels.len() * 4);
        bytes.extend_from_slice(&header);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_bgra());
        }
        bytes
    }
}
