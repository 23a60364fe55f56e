//! Inclusive rectangular windows over a grid.
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Inclusive row/column window `[row_start, row_end] × [col_start, col_end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Region {
    pub fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// The whole `rows × cols` grid, or `None` when either extent is zero.
    pub fn full(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self::new(0, rows - 1, 0, cols - 1))
    }

    /// Number of rows covered (zero when inverted).
    #[inline]
    pub fn height(&self) -> usize {
        self.row_end
            .checked_sub(self.row_start)
            .map_or(0, |d| d + 1)
    }

    /// Number of columns covered (zero when inverted).
    #[inline]
    pub fn width(&self) -> usize {
        self.col_end
            .checked_sub(self.col_start)
            .map_or(0, |d| d + 1)
    }

    /// Check the window is well-ordered and lies inside a `rows × cols` grid.
    pub fn validate(&self, rows: usize, cols: usize) -> Result<(), GridError> {
        let ordered = self.row_start <= self.row_end && self.col_start <= self.col_end;
        let inside = self.row_end < rows && self.col_end < cols;
        if ordered && inside {
            Ok(())
        } else {
            Err(GridError::InvalidRegion {
                region: *self,
                rows,
                cols,
            })
        }
    }
}
