//! Pixel-space to cell-space mapping for grid widgets.
//!
//! The host widget keeps the drawing surface; this module does the coordinate
//! math: which cell a touch point lands in, where a cell's rectangle sits,
//! and which cells a stroke's bounding region covers. No rendering here.

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// A grid's geometry within a host view of the given pixel extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub width: f32,
    pub height: f32,
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize, width: f32, height: f32) -> Self {
        Self {
            rows,
            cols,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0 || self.width <= 0.0 || self.height <= 0.0
    }

    /// Pixel size of one cell: `(width, height)`.
    pub fn cell_size(&self) -> (f32, f32) {
        if self.is_degenerate() {
            return (0.0, 0.0);
        }
        (
            self.width / self.cols as f32,
            self.height / self.rows as f32,
        )
    }

    /// The cell a pixel point lands in, as `(row, col)`.
    ///
    /// Points outside the view are clamped onto the nearest edge cell, the
    /// way the original widget clamps touch coordinates into its bounds.
    /// `None` only when the layout is degenerate.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.is_degenerate() {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size();
        let col = ((x / cell_w).floor() as i64).clamp(0, self.cols as i64 - 1) as usize;
        let row = ((y / cell_h).floor() as i64).clamp(0, self.rows as i64 - 1) as usize;
        Some((row, col))
    }

    /// Bounding rectangle of a cell. `None` out of range or degenerate.
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        if self.is_degenerate() || row >= self.rows || col >= self.cols {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size();
        Some(Rect {
            left: col as f32 * cell_w,
            top: row as f32 * cell_h,
            right: (col + 1) as f32 * cell_w,
            bottom: (row + 1) as f32 * cell_h,
        })
    }

    /// Cells whose center lies inside `rect`, in row-major order.
    ///
    /// This is how a closed stroke is committed: the host computes the
    /// stroke's region and every covered cell center gets painted.
    pub fn cells_in(&self, rect: &Rect) -> Vec<(usize, usize)> {
        let mut covered = Vec::new();
        if self.is_degenerate() {
            return covered;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                // Cell rects exist for every in-range index here.
                if let Some(cell) = self.cell_rect(row, col) {
                    let (cx, cy) = cell.center();
                    if rect.contains(cx, cy) {
                        covered.push((row, col));
                    }
                }
            }
        }
        covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        let layout = GridLayout::new(4, 8, 800.0, 400.0);
        assert_eq!(layout.cell_size(), (100.0, 100.0));
    }

    #[test]
    fn test_cell_at_interior_points() {
        let layout = GridLayout::new(4, 8, 800.0, 400.0);
        assert_eq!(layout.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(layout.cell_at(50.0, 50.0), Some((0, 0)));
        assert_eq!(layout.cell_at(150.0, 250.0), Some((2, 1)));
        assert_eq!(layout.cell_at(799.0, 399.0), Some((3, 7)));
    }

    #[test]
    fn test_cell_at_clamps_outside_points() {
        let layout = GridLayout::new(4, 8, 800.0, 400.0);
        assert_eq!(layout.cell_at(-30.0, -5.0), Some((0, 0)));
        assert_eq!(layout.cell_at(900.0, 50.0), Some((0, 7)));
        assert_eq!(layout.cell_at(50.0, 1000.0), Some((3, 0)));
    }

    #[test]
    fn test_degenerate_layouts() {
        assert_eq!(GridLayout::new(0, 8, 800.0, 400.0).cell_at(1.0, 1.0), None);
        assert_eq!(GridLayout::new(4, 0, 800.0, 400.0).cell_at(1.0, 1.0), None);
        assert_eq!(GridLayout::new(4, 8, 0.0, 400.0).cell_at(1.0, 1.0), None);
        assert_eq!(GridLayout::new(4, 8, 800.0, -1.0).cell_at(1.0, 1.0), None);
        assert_eq!(GridLayout::new(0, 0, 0.0, 0.0).cell_size(), (0.0, 0.0));
    }

    #[test]
    fn test_cell_rect() {
        let layout = GridLayout::new(4, 8, 800.0, 400.0);
        assert_eq!(
            layout.cell_rect(2, 1),
            Some(Rect {
                left: 100.0,
                top: 200.0,
                right: 200.0,
                bottom: 300.0,
            })
        );
        assert_eq!(layout.cell_rect(4, 0), None);
        assert_eq!(layout.cell_rect(0, 8), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let layout = GridLayout::new(3, 5, 500.0, 300.0);
        for row in 0..3 {
            for col in 0..5 {
                let rect = layout.cell_rect(row, col).unwrap();
                let (cx, cy) = rect.center();
                assert_eq!(layout.cell_at(cx, cy), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_cells_in_rect() {
        let layout = GridLayout::new(4, 4, 400.0, 400.0);
        // Covers the centers of the top-left 2x2 block.
        let stroke = Rect {
            left: 10.0,
            top: 10.0,
            right: 190.0,
            bottom: 190.0,
        };
        assert_eq!(layout.cells_in(&stroke), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_cells_in_misses_edge_only_overlap() {
        let layout = GridLayout::new(2, 2, 200.0, 200.0);
        // Overlaps cell (0, 0) but not its center at (50, 50).
        let stroke = Rect {
            left: 0.0,
            top: 0.0,
            right: 40.0,
            bottom: 40.0,
        };
        assert!(layout.cells_in(&stroke).is_empty());
    }
}
