use crate::error::{Error, Result};
use crate::hash::HashStream;
use crate::utils::hex_byte;
use log::debug;

/// Number of 6-digit colors that fit in one 32-digit digest.
const COLORS_PER_DIGEST: usize = 5;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Reads `rrggbb` starting at `offset` in a hex string.
    fn from_hex_at(hex: &str, offset: usize) -> Self {
        Color {
            r: hex_byte(hex, offset),
            g: hex_byte(hex, offset + 2),
            b: hex_byte(hex, offset + 4),
        }
    }
}

/// Ordered, non-empty list of colors. The first entry is the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidColorCount(0));
        }
        Ok(Palette { colors })
    }

    pub fn background(&self) -> Color {
        self.colors[0]
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Draws `count` colors from the stream.
///
/// The stream is advanced once up front. Colors are cut from consecutive
/// 6-digit slices of the digest; after each wrap back to the first slice
/// (every fifth color, once the first cycle is done) the stream advances
/// again, so the color at index 5 repeats the one at index 0.
pub fn generate_palette(stream: &mut HashStream, count: usize) -> Result<Palette> {
    if count == 0 {
        return Err(Error::InvalidColorCount(count));
    }

    stream.advance();
    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        let slice = i % COLORS_PER_DIGEST;
        colors.push(Color::from_hex_at(stream.digest(), slice * 6));
        if slice == 0 && i != 0 {
            stream.advance();
        }
    }

    debug!("generated palette of {} colors", colors.len());
    Palette::new(colors)
}
