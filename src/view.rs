//! Read-only row access over dense row-major fields.
//!
//! Field samples are addressed `(row, col)` with row 0 at the top. A view has
//! no stride: row `r` is always exactly `cols()` contiguous samples, which is
//! what the gradient window and the table renderer walk over.

/// Row-major field of `rows() × cols()` samples.
pub trait FieldView {
    type Value: Copy;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Samples of row `r`, left to right. Panics when `r >= rows()`.
    fn row(&self, r: usize) -> &[Self::Value];

    fn row_iter(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { view: self, r: 0 }
    }

    /// Whole field as one slice, when the implementor stores it that way.
    fn as_slice(&self) -> Option<&[Self::Value]> {
        None
    }
}

/// Top-to-bottom iterator over the rows of a [`FieldView`].
pub struct Rows<'a, V: ?Sized + FieldView> {
    view: &'a V,
    r: usize,
}

impl<'a, V: FieldView> Iterator for Rows<'a, V> {
    type Item = &'a [V::Value];

    fn next(&mut self) -> Option<Self::Item> {
        if self.r >= self.view.rows() {
            return None;
        }
        let r = self.r;
        self.r += 1;
        Some(self.view.row(r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.view.rows().saturating_sub(self.r);
        (left, Some(left))
    }
}

impl<'a, V: FieldView> ExactSizeIterator for Rows<'a, V> {}
