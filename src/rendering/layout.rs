use crate::error::RenderError;

const BACKEND: &str = "graphics";

/// Fixed mapping from grid cells to window pixels: `pixel = index * cell_size`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub rows: usize,
    pub columns: usize,
}

impl SurfaceLayout {
    /// Check that a `rows x columns` grid can be drawn on the window
    pub fn new(
        width: u32,
        height: u32,
        cell_size: u32,
        rows: usize,
        columns: usize,
    ) -> Result<Self, RenderError> {
        if cell_size == 0 {
            return Err(RenderError::init(BACKEND, "cell size must be at least one pixel"));
        }
        if rows == 0 || columns == 0 {
            return Err(RenderError::init(
                BACKEND,
                format!("a {width}x{height} window holds no {cell_size}px cells"),
            ));
        }
        if rows > u16::MAX as usize || columns > u16::MAX as usize {
            return Err(RenderError::init(
                BACKEND,
                format!("{rows}x{columns} grid exceeds the texture size limit"),
            ));
        }
        let needed_width = columns as u64 * cell_size as u64;
        let needed_height = rows as u64 * cell_size as u64;
        if needed_width > width as u64 || needed_height > height as u64 {
            return Err(RenderError::init(
                BACKEND,
                format!("{rows}x{columns} grid needs {needed_width}x{needed_height}px, window is {width}x{height}"),
            ));
        }
        Ok(Self { width, height, cell_size, rows, columns })
    }

    /// Top-left pixel of a cell as `(x, y)`
    pub fn cell_origin(&self, row: usize, column: usize) -> (f32, f32) {
        let size = self.cell_size as f32;
        (column as f32 * size, row as f32 * size)
    }

    /// Pixel extent of the whole grid as `(width, height)`
    pub fn grid_extent(&self) -> (f32, f32) {
        self.cell_origin(self.rows, self.columns)
    }
}
