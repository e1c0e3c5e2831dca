/// Everything that can go wrong while generating an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {name}: {value} (must be at least 1)")]
    InvalidDimension { name: &'static str, value: u32 },

    #[error("invalid color count: {0} (must be at least 1)")]
    InvalidColorCount(usize),

    #[error("raster holds {actual} bytes, expected {expected}")]
    RasterSize { expected: usize, actual: usize },

    #[error("image codec failure: {0}")]
    Codec(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
