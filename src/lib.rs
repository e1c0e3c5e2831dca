//! Seeded, horizontally symmetric pixel-art patterns.
//!
//! A seed string drives an MD5 hash chain. The chain picks a palette, then
//! paints a coarse pattern over the left half of the image and mirrors it to
//! the right. The same seed and options always give the same pixels.

pub mod codec;
pub mod error;
pub mod hash;
pub mod options;
pub mod palette;
pub mod pattern;
pub mod raster;
pub mod utils;

pub use codec::GeneratedImage;
pub use error::{Error, Result};
pub use options::Options;

use hash::HashStream;
use log::debug;

/// Generates the image described by `options`, saving it as PNG when a
/// filename is set.
pub fn generate_image(options: &Options) -> Result<GeneratedImage> {
    let grid = options.validate()?;

    let mut stream = match options.seed.as_deref() {
        // An empty seed counts as no seed
        Some(seed) if !seed.is_empty() => HashStream::new(seed),
        _ => HashStream::from_entropy(),
    };
    debug!("initial digest {}", stream.digest());

    let palette = palette::generate_palette(&mut stream, options.colors)?;
    let pixels = pattern::generate_pattern(&mut stream, &palette, grid);
    let raster = raster::to_raster(&pixels);
    let image = GeneratedImage::from_raster(raster, options.width, options.height)?;

    if let Some(filename) = &options.filename {
        image.save(filename)?;
    }
    Ok(image)
}
