//! Compact row-signature codec.
//!
//! Each row of the grid, read left to right, is one base-2 number; the
//! signature is the decimal form of every row, joined with `,`. A 3×4 grid
//! whose first row is `1001` encodes as `"9,0,0"`. The format is what hosts
//! export as a pattern fingerprint for transmission or storage.

use crate::grid::{Grid, GridError};

/// Encode every row of the grid as a decimal number, comma-joined.
///
/// A grid with zero rows encodes as the empty string; a zero-width row
/// encodes as `0`. Deterministic: the output depends only on cell contents.
pub fn encode(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        if row > 0 {
            out.push(',');
        }
        let mut value: u128 = 0;
        for col in 0..grid.cols() {
            value = (value << 1) | u128::from(grid.is_filled(row, col));
        }
        out.push_str(&value.to_string());
    }
    out
}

/// Error when decoding a row signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The target dimensions are not constructible.
    Grid(GridError),
    /// The signature has the wrong number of rows.
    RowCountMismatch { expected: usize, found: usize },
    /// A row token is not a decimal number.
    InvalidRowValue { row: usize, token: String },
    /// A row value needs more bits than the grid has columns.
    ValueTooWide { row: usize, value: u128 },
}

impl std::fmt::Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureError::Grid(e) => write!(f, "{}", e),
            SignatureError::RowCountMismatch { expected, found } => {
                write!(f, "signature has {} rows, expected {}", found, expected)
            }
            SignatureError::InvalidRowValue { row, token } => {
                write!(f, "row {} is not a decimal number: {:?}", row, token)
            }
            SignatureError::ValueTooWide { row, value } => {
                write!(f, "row {} value {} does not fit the grid width", row, value)
            }
        }
    }
}

impl std::error::Error for SignatureError {}

/// Decode a signature produced by [`encode`] back into a grid of the given
/// dimensions.
///
/// The signature carries cell data only; the decoded grid has the default
/// mode and a hidden path overlay.
pub fn decode(signature: &str, rows: usize, cols: usize) -> Result<Grid, SignatureError> {
    let mut grid = Grid::new(rows, cols).map_err(SignatureError::Grid)?;

    let tokens: Vec<&str> = if signature.is_empty() {
        Vec::new()
    } else {
        signature.split(',').collect()
    };
    if tokens.len() != rows {
        return Err(SignatureError::RowCountMismatch {
            expected: rows,
            found: tokens.len(),
        });
    }

    for (row, token) in tokens.iter().enumerate() {
        let value: u128 = token
            .trim()
            .parse()
            .map_err(|_| SignatureError::InvalidRowValue {
                row,
                token: (*token).to_string(),
            })?;
        if cols < 128 && value >= 1u128 << cols {
            return Err(SignatureError::ValueTooWide { row, value });
        }
        for col in 0..cols {
            let bit = (value >> (cols - 1 - col)) & 1 == 1;
            grid.set_cell(row, col, bit);
        }
    }

    Ok(grid)
}
