//! Owned dense 2D scalar field in row-major layout.
//!
//! Storage is a single `Vec<T>` of exactly `rows * cols` samples. Reads
//! outside the grid return zero and unchecked writes outside it are ignored;
//! `try_set_value` reports them instead. Resizing reallocates and keeps the
//! overlapping top-left block.
use crate::error::GridError;
use crate::gradient::{self, GradientReport};
use crate::region::Region;
use crate::render::{self, RenderOptions};
use crate::scalar::Scalar;
use crate::view::FieldView;
use log::debug;
use nalgebra::DMatrix;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid2D<T> {
    rows: usize,
    cols: usize,
    /// Backing storage in row-major order
    data: Vec<T>,
}

impl<T: Scalar> Grid2D<T> {
    /// Construct a zero-initialized `rows × cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Like [`Grid2D::new`], but reports size overflow and allocation failure.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let data = zeroed_buffer(rows, cols)?;
        Ok(Self { rows, cols, data })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::CapacityOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(GridError::ShapeMismatch {
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn in_bounds(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols
    }

    #[inline]
    /// Convert (r, c) to a linear index into the buffer.
    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Checked cell access.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if self.in_bounds(r, c) {
            Some(&self.data[self.idx(r, c)])
        } else {
            None
        }
    }

    /// Cell value, or zero outside the grid.
    #[inline]
    pub fn get_value(&self, r: usize, c: usize) -> T {
        self.get(r, c).copied().unwrap_or_else(T::zero)
    }

    /// Write a cell; coordinates outside the grid are ignored.
    #[inline]
    pub fn set_value(&mut self, r: usize, c: usize, value: T) {
        if self.in_bounds(r, c) {
            let i = self.idx(r, c);
            self.data[i] = value;
        }
    }

    /// Write a cell, reporting coordinates outside the grid.
    pub fn try_set_value(&mut self, r: usize, c: usize, value: T) -> Result<(), GridError> {
        if !self.in_bounds(r, c) {
            return Err(GridError::OutOfBounds {
                row: r,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let i = self.idx(r, c);
        self.data[i] = value;
        Ok(())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start = r * self.cols;
        let end = start + self.cols;
        &mut self.data[start..end]
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> + '_ {
        // chunks_exact_mut rejects a zero chunk size
        let cols = self.cols.max(1);
        let rows = if self.cols == 0 { 0 } else { self.rows };
        self.data.chunks_exact_mut(cols).take(rows)
    }

    /// Reallocate to `new_rows × new_cols`, keeping the overlapping top-left
    /// block and zero-filling the rest.
    pub fn resize(&mut self, new_rows: usize, new_cols: usize) {
        let next = Self::new(new_rows, new_cols);
        self.adopt(next);
    }

    /// Like [`Grid2D::resize`], but leaves the grid untouched when the new
    /// buffer cannot be allocated.
    pub fn try_resize(&mut self, new_rows: usize, new_cols: usize) -> Result<(), GridError> {
        let next = Self::try_new(new_rows, new_cols)?;
        self.adopt(next);
        Ok(())
    }

    /// Copy the overlap into the zeroed `next` grid, then take it over; the
    /// old buffer is dropped.
    fn adopt(&mut self, mut next: Self) {
        let copy_rows = self.rows.min(next.rows);
        let copy_cols = self.cols.min(next.cols);
        for r in 0..copy_rows {
            next.row_mut(r)[..copy_cols].copy_from_slice(&self.row(r)[..copy_cols]);
        }
        debug!(
            "Grid2D::resize {}x{} -> {}x{} (kept {}x{})",
            self.rows, self.cols, next.rows, next.cols, copy_rows, copy_cols
        );
        *self = next;
    }

    /// Mean local gradient magnitude over the inclusive window
    /// `[row_start, row_end] × [col_start, col_end]`.
    ///
    /// See [`gradient::average_gradient`] for the exact definition.
    pub fn average_gradient(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<T, GridError> {
        self.average_gradient_in(&Region::new(row_start, row_end, col_start, col_end))
    }

    pub fn average_gradient_in(&self, region: &Region) -> Result<T, GridError> {
        gradient::average_gradient(self, region)
    }

    /// Gradient average together with the accumulated totals.
    pub fn gradient_report(&self, region: &Region) -> Result<GradientReport<T>, GridError> {
        gradient::gradient_report(self, region)
    }

    /// Convert to an nalgebra matrix with the same (row, col) layout.
    pub fn to_matrix(&self) -> DMatrix<T> {
        DMatrix::from_row_slice(self.rows, self.cols, &self.data)
    }

    pub fn from_matrix(m: &DMatrix<T>) -> Self {
        let (rows, cols) = m.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            data.extend(m.row(r).iter().copied());
        }
        Self { rows, cols, data }
    }
}

impl<T: Scalar + std::fmt::Display> Grid2D<T> {
    /// Render with the default table options (one decimal place).
    pub fn render(&self) -> String {
        render::render_table(self, &RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        render::render_table(self, options)
    }
}

impl<T: Scalar + std::fmt::Display> std::fmt::Display for Grid2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let options = RenderOptions {
            precision: f.precision().unwrap_or(RenderOptions::default().precision),
            ..RenderOptions::default()
        };
        f.write_str(&render::render_table(self, &options))
    }
}

impl<T: Scalar> FieldView for Grid2D<T> {
    type Value = T;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        Some(&self.data)
    }
}

fn zeroed_buffer<T: Scalar>(rows: usize, cols: usize) -> Result<Vec<T>, GridError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(GridError::CapacityOverflow { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| GridError::AllocationFailed { rows, cols })?;
    data.resize(len, T::zero());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(rows: usize, cols: usize) -> Grid2D<i32> {
        let mut g = Grid2D::new(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                g.set_value(r, c, (r * 10 + c) as i32);
            }
        }
        g
    }

    #[test]
    fn new_grid_is_zeroed() {
        let g: Grid2D<f32> = Grid2D::new(2, 4);
        assert_eq!(g.dims(), (2, 4));
        assert!(g.as_slice().unwrap().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn out_of_range_reads_are_zero_and_writes_ignored() {
        let mut g = ramp(2, 3);
        let before = g.clone();
        assert_eq!(g.get_value(2, 0), 0);
        assert_eq!(g.get_value(0, 3), 0);
        assert_eq!(g.get_value(usize::MAX, usize::MAX), 0);
        g.set_value(5, 5, 99);
        g.set_value(0, 3, 99);
        assert_eq!(g, before);
    }

    #[test]
    fn try_set_value_reports_out_of_bounds() {
        let mut g = ramp(2, 2);
        let err = g.try_set_value(2, 0, 7).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
        assert!(g.try_set_value(1, 1, 7).is_ok());
        assert_eq!(g.get_value(1, 1), 7);
    }

    #[test]
    fn resize_grows_and_shrinks_from_top_left() {
        let mut g = ramp(3, 3);
        g.resize(4, 5);
        assert_eq!(g.dims(), (4, 5));
        assert_eq!(g.get_value(2, 2), 22);
        assert_eq!(g.get_value(3, 4), 0);
        assert_eq!(g.get_value(1, 3), 0);

        g.resize(2, 1);
        assert_eq!(g.as_slice().unwrap(), &[0, 10]);
        assert_eq!(g.get_value(0, 1), 0);
    }

    #[test]
    fn resize_to_empty_and_back() {
        let mut g = ramp(2, 2);
        g.resize(0, 3);
        assert_eq!(g.dims(), (0, 3));
        assert_eq!(g.get_value(0, 0), 0);
        g.resize(2, 2);
        assert!(g.as_slice().unwrap().iter().all(|&v| v == 0));
    }

    #[test]
    fn try_new_and_try_resize_report_overflow() {
        assert_eq!(
            Grid2D::<f64>::try_new(usize::MAX, 2).unwrap_err(),
            GridError::CapacityOverflow {
                rows: usize::MAX,
                cols: 2
            }
        );
        let mut g = ramp(2, 2);
        assert!(g.try_resize(usize::MAX, usize::MAX).is_err());
        assert_eq!(g, ramp(2, 2));
        g.try_resize(3, 1).unwrap();
        assert_eq!(g.as_slice().unwrap(), &[0, 10, 0]);
    }

    #[test]
    fn from_vec_checks_shape() {
        assert!(Grid2D::from_vec(2, 2, vec![1u8, 2, 3]).is_err());
        let g = Grid2D::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(g.get_value(1, 0), 3);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid2D::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::ShapeMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn row_mut_addresses_one_row() {
        let mut g: Grid2D<u16> = Grid2D::new(3, 2);
        g.row_mut(1).copy_from_slice(&[4, 5]);
        assert_eq!(g.as_slice().unwrap(), &[0, 0, 4, 5, 0, 0]);
        assert_eq!(g.get_value(1, 1), 5);
    }

    #[test]
    fn rows_mut_visits_each_row() {
        let mut g: Grid2D<i64> = Grid2D::new(3, 2);
        for (r, row) in g.rows_mut().enumerate() {
            row.fill(r as i64);
        }
        assert_eq!(g.row_iter().map(|row| row[1]).collect::<Vec<_>>(), [0, 1, 2]);

        let mut empty: Grid2D<i64> = Grid2D::new(3, 0);
        assert_eq!(empty.rows_mut().count(), 0);
    }

    #[test]
    fn matrix_round_trip_keeps_coordinates() {
        let g = ramp(2, 3);
        let m = g.to_matrix();
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(Grid2D::from_matrix(&m), g);
    }
}
