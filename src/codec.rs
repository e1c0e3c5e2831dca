use crate::error::{Error, Result};
use crate::raster::{RasterBuffer, CHANNELS};
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageOutputFormat, Rgba, RgbaImage};
use log::info;
use std::io::Cursor;
use std::path::Path;

/// A generated image, ready to inspect, export or process further.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    buffer: RgbaImage,
}

impl GeneratedImage {
    /// Wraps an RGBA raster of `width` x `height` pixels.
    pub fn from_raster(raster: RasterBuffer, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        let actual = raster.len();
        RgbaImage::from_raw(width, height, raster)
            .map(|buffer| GeneratedImage { buffer })
            .ok_or(Error::RasterSize { expected, actual })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Always 4 (RGBA).
    pub fn channels(&self) -> u8 {
        CHANNELS as u8
    }

    /// Raw RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.buffer.get_pixel(x, y)
    }

    /// Writes the image to `path` as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.buffer.save_with_format(path, image::ImageFormat::Png)?;
        info!("wrote {}x{} image to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Encodes the image as PNG in memory.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.buffer.write_to(&mut cursor, ImageOutputFormat::Png)?;
        Ok(cursor.into_inner())
    }

    /// Nearest-neighbour resize, which keeps the pixel-art edges hard.
    pub fn resize(&self, width: u32, height: u32) -> RgbaImage {
        imageops::resize(&self.buffer, width, height, FilterType::Nearest)
    }

    pub fn grayscale(&self) -> GrayImage {
        imageops::grayscale(&self.buffer)
    }

    pub fn into_inner(self) -> RgbaImage {
        self.buffer
    }
}
