use serde::{Deserialize, Serialize};

/// Maximum number of columns a grid may have.
///
/// Row signatures pack one row into a `u128` (see [`crate::signature`]), so a
/// row holds at most 128 bits. The cap is checked once, at construction.
pub const MAX_COLUMNS: usize = 128;

/// Interaction mode: what painting a cell does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Painting fills the cell.
    #[default]
    Draw,
    /// Painting clears the cell.
    Erase,
}

/// Error when constructing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// More columns requested than a row signature can hold.
    TooManyColumns { requested: usize },
    /// `rows * cols` does not fit in `usize`.
    TooManyCells { rows: usize, cols: usize },
    /// Deserialized cell data does not match the stated dimensions.
    CellCountMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::TooManyColumns { requested } => {
                write!(f, "grid width {} exceeds {} columns", requested, MAX_COLUMNS)
            }
            GridError::TooManyCells { rows, cols } => {
                write!(f, "grid {}x{} has more cells than fit in memory", rows, cols)
            }
            GridError::CellCountMismatch { expected, found } => {
                write!(f, "grid data has {} cells, dimensions say {}", found, expected)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Untrusted mirror of [`Grid`] for deserialization; the shape checks live
/// in the `TryFrom` conversion.
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    mode: Mode,
    show_path: bool,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.cols > MAX_COLUMNS {
            return Err(GridError::TooManyColumns {
                requested: raw.cols,
            });
        }
        let expected = raw.rows.checked_mul(raw.cols).ok_or(GridError::TooManyCells {
            rows: raw.rows,
            cols: raw.cols,
        })?;
        if raw.cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
            mode: raw.mode,
            show_path: raw.show_path,
        })
    }
}

/// A rectangular grid of binary cells backing a grid-drawing widget.
///
/// The host widget owns a `Grid` and routes every read and write through its
/// API. Dimensions are fixed at construction; afterwards only individual
/// cells, the paint [`Mode`], and the path-overlay flag change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major; length is always `rows * cols`.
    cells: Vec<bool>,
    mode: Mode,
    show_path: bool,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell unfilled.
    ///
    /// Mode starts as [`Mode::Draw`] and the path overlay is hidden.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if cols > MAX_COLUMNS {
            return Err(GridError::TooManyColumns { requested: cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooManyCells { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
            mode: Mode::default(),
            show_path: false,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (row, col) is filled. Out of range reads as unfilled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    /// One row of cells, left to right. `None` if the row is out of range.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Set one cell. Returns `true` if applied; out-of-range coordinates
    /// leave the grid untouched and return `false`.
    pub fn set_cell(&mut self, row: usize, col: usize, filled: bool) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col] = filled;
        true
    }

    /// Apply the current mode to one cell: fill in [`Mode::Draw`], clear in
    /// [`Mode::Erase`]. Returns `true` if applied.
    pub fn paint(&mut self, row: usize, col: usize) -> bool {
        let filled = self.mode == Mode::Draw;
        self.set_cell(row, col, filled)
    }

    /// Apply the current mode to a batch of cells (e.g. every cell covered by
    /// a stroke). Out-of-range cells are skipped. Returns the number applied.
    pub fn paint_cells<I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut applied = 0;
        for (row, col) in cells {
            if self.paint(row, col) {
                applied += 1;
            }
        }
        applied
    }

    /// Clear every cell, keeping dimensions, mode, and the overlay flag.
    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn is_draw_mode(&self) -> bool {
        self.mode == Mode::Draw
    }

    pub fn is_erase_mode(&self) -> bool {
        self.mode == Mode::Erase
    }

    pub fn show_path(&self) -> bool {
        self.show_path
    }

    pub fn set_show_path(&mut self, show: bool) {
        self.show_path = show;
    }
}
