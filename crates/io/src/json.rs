// JSON import/export

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use drawgrid_engine::grid::Grid;

/// Export the full grid state (cells, mode, overlay flag) as JSON.
pub fn export(grid: &Grid, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| e.to_string())?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, grid).map_err(|e| e.to_string())
}

/// Import a grid previously written by [`export`].
pub fn import(path: &Path) -> Result<Grid, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| e.to_string())
}
