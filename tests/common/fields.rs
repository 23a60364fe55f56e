use scalar_field::{Grid2D, Scalar};

/// Sampled potential used throughout the regression tests.
pub const POTENTIAL_3X3: [[i32; 3]; 3] = [[10, 8, 5], [12, 9, 6], [15, 11, 7]];

/// Builds a grid from `POTENTIAL_3X3` through `set_value`.
pub fn potential<T: Scalar>() -> Grid2D<T> {
    let mut grid = Grid2D::new(3, 3);
    for (r, row) in POTENTIAL_3X3.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            grid.set_value(r, c, cast(v));
        }
    }
    grid
}

/// Grid where every cell holds `value`.
pub fn uniform<T: Scalar>(rows: usize, cols: usize, value: T) -> Grid2D<T> {
    let mut grid = Grid2D::new(rows, cols);
    grid.fill(value);
    grid
}

fn cast<T: Scalar>(v: i32) -> T {
    num_traits::cast(v).expect("fixture value fits the element type")
}
