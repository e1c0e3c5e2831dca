use crate::pattern::PixelMatrix;

/// Bytes per pixel in a raster: red, green, blue, alpha.
pub const CHANNELS: usize = 4;

/// Row-major RGBA bytes, alpha always opaque.
pub type RasterBuffer = Vec<u8>;

/// Flattens a pixel matrix into an RGBA buffer.
pub fn to_raster(pixels: &PixelMatrix) -> RasterBuffer {
    let mut raster = Vec::with_capacity(pixels.len() * CHANNELS);
    // Standard layout iterates rows first, matching image row order
    for color in pixels.iter() {
        raster.extend_from_slice(&[color.r, color.g, color.b, u8::MAX]);
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;
    use ndarray::array;

    #[test]
    fn test_to_raster() {
        let red = Color::new(255, 0, 0);
        let teal = Color::new(0, 128, 128);
        let pixels = array![[red, teal], [teal, Color::BLACK]];

        let raster = to_raster(&pixels);
        assert_eq!(
            raster,
            vec![255, 0, 0, 255, 0, 128, 128, 255, 0, 128, 128, 255, 0, 0, 0, 255]
        );
    }

    #[test]
    fn test_raster_length_and_alpha() {
        let pixels = PixelMatrix::from_elem((3, 5), Color::new(1, 2, 3));
        let raster = to_raster(&pixels);
        assert_eq!(raster.len(), 3 * 5 * CHANNELS);
        assert!(raster.chunks_exact(CHANNELS).all(|px| px == [1, 2, 3, 255]));
    }
}
