use crate::error::{Error, Result};
use crate::pattern::PatternGrid;
use std::path::PathBuf;

/// Settings for one generated image.
///
/// `pwidth` is the full pattern width. Only its left half is read from the
/// hash and the right half mirrors it; an odd width puts the middle column
/// half a cell off the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub colors: usize,
    pub width: u32,
    pub height: u32,
    pub pwidth: u32,
    pub pheight: u32,
    pub seed: Option<String>,
    pub filename: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            colors: 2,
            width: 256,
            height: 256,
            pwidth: 16,
            pheight: 16,
            seed: None,
            filename: None,
        }
    }
}

impl Options {
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_pattern(mut self, pwidth: u32, pheight: u32) -> Self {
        self.pwidth = pwidth;
        self.pheight = pheight;
        self
    }

    pub fn with_colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Checks every numeric field and returns the pattern geometry.
    pub fn validate(&self) -> Result<PatternGrid> {
        if self.colors == 0 {
            return Err(Error::InvalidColorCount(self.colors));
        }
        PatternGrid::new(self.width, self.height, self.pwidth, self.pheight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.colors, 2);
        assert_eq!((opts.width, opts.height), (256, 256));
        assert_eq!((opts.pwidth, opts.pheight), (16, 16));
        assert!(opts.seed.is_none());
        assert!(opts.filename.is_none());
    }

    #[test]
    fn test_validate_builds_grid() {
        let grid = Options::default().validate().unwrap();
        assert_eq!(grid.columns(), 16);
        assert_eq!(grid.rows(), 16);
        assert_eq!(grid.cell_width(), 16);

        let grid = Options::default().with_pattern(5, 3).validate().unwrap();
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cell_width(), 52);

        let grid = Options::default().with_pattern(1, 16).validate().unwrap();
        assert_eq!(grid.cell_width(), 256);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            Options::default().with_colors(0).validate(),
            Err(Error::InvalidColorCount(0))
        ));
        let err = Options::default().with_pattern(0, 16).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { name: "pattern width", value: 0 }));
        assert_eq!(err.to_string(), "invalid pattern width: 0 (must be at least 1)");
        assert!(matches!(
            Options::default().with_pattern(16, 0).validate(),
            Err(Error::InvalidDimension { name: "pattern height", .. })
        ));
        assert!(Options::default().with_size(0, 10).validate().is_err());
        assert!(Options::default().with_size(10, 0).validate().is_err());
    }
}
