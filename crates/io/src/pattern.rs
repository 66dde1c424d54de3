//! Pattern text format.
//!
//! Two lines: a `<rows>x<cols>` header, then the row signature
//! (see `drawgrid_engine::signature`). A 3×4 grid with the corner cells of
//! the first row filled:
//!
//! ```text
//! 3x4
//! 9,0,0
//! ```
//!
//! The format carries cell data only; mode and the path-overlay flag are
//! runtime state and stay out of the file.

use std::fs;
use std::path::Path;

use drawgrid_engine::grid::Grid;
use drawgrid_engine::signature;

/// Write the grid's dimensions and row signature to `path`.
pub fn export(grid: &Grid, path: &Path) -> Result<(), String> {
    let contents = format!(
        "{}x{}\n{}\n",
        grid.rows(),
        grid.cols(),
        signature::encode(grid)
    );
    fs::write(path, contents).map_err(|e| e.to_string())
}

/// Read a pattern file written by [`export`].
pub fn import(path: &Path) -> Result<Grid, String> {
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let mut lines = contents.lines();

    let header = lines.next().ok_or("pattern file is empty")?;
    let (rows, cols) = parse_header(header)?;
    let sig = lines.next().unwrap_or("").trim();

    signature::decode(sig, rows, cols).map_err(|e| e.to_string())
}

fn parse_header(header: &str) -> Result<(usize, usize), String> {
    let bad = || format!("invalid pattern header: {:?}", header);
    let (rows, cols) = header.trim().split_once('x').ok_or_else(bad)?;
    let rows = rows.parse().map_err(|_| bad())?;
    let cols = cols.parse().map_err(|_| bad())?;
    Ok((rows, cols))
}
