use crate::region::Region;

/// Reasons a grid operation may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Checked write outside `[0, rows) × [0, cols)`.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Gradient window is inverted or reaches past the grid.
    InvalidRegion {
        region: Region,
        rows: usize,
        cols: usize,
    },
    /// Buffer length does not match `rows * cols`.
    ShapeMismatch { expected: usize, found: usize },
    /// `rows * cols` does not fit in `usize`.
    CapacityOverflow { rows: usize, cols: usize },
    /// The allocator refused a `rows × cols` buffer.
    AllocationFailed { rows: usize, cols: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row}, {col}) outside {rows}x{cols} grid"),
            GridError::InvalidRegion { region, rows, cols } => write!(
                f,
                "invalid gradient region rows [{}, {}] cols [{}, {}] for {rows}x{cols} grid",
                region.row_start, region.row_end, region.col_start, region.col_end
            ),
            GridError::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch (expected {expected} cells, found {found})")
            }
            GridError::CapacityOverflow { rows, cols } => {
                write!(f, "grid size {rows}x{cols} overflows usize")
            }
            GridError::AllocationFailed { rows, cols } => {
                write!(f, "failed to allocate {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
