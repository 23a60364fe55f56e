//! Numeric bound for field samples.
//!
//! Any `Copy` type with the usual arithmetic (`num_traits::Num`), a partial
//! order and a cast from `usize` counts qualifies: all primitive integers and
//! both float widths.
use num_traits::{Num, NumCast, Zero};
use std::fmt::Debug;

/// Element type stored in a [`Grid2D`](crate::Grid2D).
pub trait Scalar: Copy + PartialOrd + Num + NumCast + Debug + 'static {
    /// `|self - other|`, computed as `max - min` so unsigned types never wrap.
    ///
    /// Signed extremes (`i32::MIN` against `i32::MAX`) still overflow the
    /// subtraction; native arithmetic applies.
    #[inline]
    fn abs_delta(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }

    /// Divide a non-negative value by an element count using the type's
    /// native division.
    ///
    /// A zero count yields zero. A count beyond the type's range also yields
    /// zero: any non-negative value of the type is smaller than the count, so
    /// the truncated quotient is zero.
    #[inline]
    fn div_count(self, count: usize) -> Self {
        if count == 0 {
            return <Self as Zero>::zero();
        }
        match <Self as NumCast>::from(count) {
            Some(n) => self / n,
            None => <Self as Zero>::zero(),
        }
    }
}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + NumCast + Debug + 'static {}
