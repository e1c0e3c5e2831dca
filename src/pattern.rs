// src/pattern.rs
use crate::error::{Error, Result};
use crate::hash::HashStream;
use crate::palette::{Color, Palette};
use crate::utils::{ceil_div, hex_nibble};
use log::debug;
use ndarray::Array2;

/// Pattern rows covered by one digest before the stream advances.
const ROWS_PER_EPOCH: usize = 4;

/// Full-resolution pixel grid, indexed `[[y, x]]`.
pub type PixelMatrix = Array2<Color>;

/// Geometry of the logical pattern laid over the image.
///
/// Cells are drawn from the left edge and every pixel is mirrored onto the
/// right, so only half of the columns are ever read from the hash. Columns are counted in half-cell steps, so an odd pattern width
/// has columns that start halfway into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternGrid {
    image_width: usize,
    image_height: usize,
    columns: usize,
    rows: usize,
}

impl PatternGrid {
    /// `columns` by `rows` pattern over an image of the given size, where
    /// `columns` is the full (mirrored) pattern width.
    pub fn new(image_width: u32, image_height: u32, columns: u32, rows: u32) -> Result<Self> {
        for (name, value) in [
            ("width", image_width),
            ("height", image_height),
            ("pattern width", columns),
            ("pattern height", rows),
        ] {
            if value == 0 {
                return Err(Error::InvalidDimension { name, value });
            }
        }
        Ok(PatternGrid {
            image_width: image_width as usize,
            image_height: image_height as usize,
            columns: columns as usize,
            rows: rows as usize,
        })
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Pixel width of one cell.
    pub fn cell_width(&self) -> usize {
        ceil_div(self.image_width, self.columns)
    }

    /// Pixel height of one cell.
    pub fn cell_height(&self) -> usize {
        ceil_div(self.image_height, self.rows)
    }

    /// Position of the `i`th cell of a band: column in half-cell steps and
    /// row offset within the band.
    fn locate(&self, i: usize) -> (usize, usize) {
        ((2 * i) % self.columns, (2 * i) / self.columns)
    }

    /// First pixel column of a cell starting at `half_column`, or `None`
    /// when that start falls between two pixels.
    fn pixel_start(&self, half_column: usize) -> Option<usize> {
        let doubled = half_column * self.cell_width();
        (doubled % 2 == 0).then_some(doubled / 2)
    }
}

/// Paints the cell starting at pixel column `x_start` in pattern row `y`,
/// plus its mirror, with `color`. Clipped to the image.
fn paint_cell(pixels: &mut PixelMatrix, grid: &PatternGrid, x_start: usize, y: usize, color: Color) {
    let (cell_w, cell_h) = (grid.cell_width(), grid.cell_height());
    let width = grid.image_width;

    let x_end = (x_start + cell_w).min(width);
    let y_end = (y * cell_h + cell_h).min(grid.image_height);
    for x_img in x_start..x_end {
        for y_img in y * cell_h..y_end {
            pixels[[y_img, x_img]] = color;
            pixels[[y_img, width - 1 - x_img]] = color;
        }
    }
}

/// Builds the mirrored pixel grid for `grid` from the stream.
///
/// Every pixel starts as the palette background. Pattern rows are handled in
/// bands of four; each band reads one fresh digest, one hex digit per cell in
/// row-major order, and maps the digit to a palette entry. Digits that would
/// land past the last pattern row are ignored, and so are cells whose left
/// edge is not on a whole pixel.
pub fn generate_pattern(stream: &mut HashStream, palette: &Palette, grid: PatternGrid) -> PixelMatrix {
    stream.advance();

    let mut pixels = Array2::from_elem((grid.image_height, grid.image_width), palette.background());
    let colors = palette.len();

    for epoch in (0..=grid.rows).step_by(ROWS_PER_EPOCH) {
        let digest = stream.advance();
        for (i, c) in digest.bytes().enumerate() {
            let (half_column, row) = grid.locate(i);
            let y = epoch + row;
            if y >= grid.rows {
                break;
            }

            let index = hex_nibble(c) as usize * colors / 16;
            if let (Some(x_start), Some(color)) = (grid.pixel_start(half_column), palette.get(index)) {
                paint_cell(&mut pixels, &grid, x_start, y, color);
            }
        }
    }

    debug!(
        "painted {}x{} pattern over {}x{} pixels",
        grid.columns,
        grid.rows,
        grid.image_width,
        grid.image_height
    );
    pixels
}

/// True when every row reads the same left to right and right to left.
pub fn is_mirrored(pixels: &PixelMatrix) -> bool {
    pixels
        .rows()
        .into_iter()
        .all(|row| row.iter().eq(row.iter().rev()))
}
