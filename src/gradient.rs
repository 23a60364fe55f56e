//! Windowed mean of local gradient magnitude.
//!
//! For every cell of an inclusive window, the local gradient magnitude is the
//! mean absolute difference to its forward neighbours (right and down) that
//! also lie inside the window. The window result is the mean of those local
//! values over the cells that have at least one such neighbour; the
//! bottom-right cell of the window never does.
//!
//! Neighbours outside the window are ignored even when they exist in the grid,
//! so the result depends only on the samples inside the window. All divisions
//! use the element type's own arithmetic: integer fields truncate both the
//! per-cell mean and the final mean.
//!
//! Complexity: O(H·W) over the window; no allocation.
use crate::error::GridError;
use crate::region::Region;
use crate::scalar::Scalar;
use crate::view::FieldView;
use log::debug;
use num_traits::Zero;
use serde::Serialize;

/// Accumulated totals behind a window's gradient average.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientReport<T> {
    pub region: Region,
    /// Cells with at least one in-window forward neighbour
    pub points_counted: usize,
    /// Sum of per-cell local gradient magnitudes
    pub gradient_total: T,
    /// `gradient_total / points_counted`, or zero when nothing was counted
    pub average: T,
}

/// Mean local gradient magnitude over `region`.
pub fn average_gradient<V>(view: &V, region: &Region) -> Result<V::Value, GridError>
where
    V: FieldView,
    V::Value: Scalar,
{
    gradient_report(view, region).map(|report| report.average)
}

/// Same as [`average_gradient`], keeping the intermediate totals.
pub fn gradient_report<V>(
    view: &V,
    region: &Region,
) -> Result<GradientReport<V::Value>, GridError>
where
    V: FieldView,
    V::Value: Scalar,
{
    if let Err(err) = region.validate(view.rows(), view.cols()) {
        debug!("average_gradient rejected window: {err}");
        return Err(err);
    }

    let zero = <V::Value as Zero>::zero();
    let mut gradient_total = zero;
    let mut points_counted = 0usize;

    for i in region.row_start..=region.row_end {
        let row = &view.row(i)[region.col_start..=region.col_end];
        let below =
            (i < region.row_end).then(|| &view.row(i + 1)[region.col_start..=region.col_end]);
        for (j, &here) in row.iter().enumerate() {
            let mut diff_sum = zero;
            let mut neighbor_count = 0usize;
            if let Some(&right) = row.get(j + 1) {
                diff_sum = diff_sum + here.abs_delta(right);
                neighbor_count += 1;
            }
            if let Some(below) = below {
                diff_sum = diff_sum + here.abs_delta(below[j]);
                neighbor_count += 1;
            }
            if neighbor_count > 0 {
                gradient_total = gradient_total + diff_sum.div_count(neighbor_count);
                points_counted += 1;
            }
        }
    }

    // zero when nothing was counted
    let average = gradient_total.div_count(points_counted);

    debug!(
        "average_gradient {}x{} window at ({}, {}): points={} average={:?}",
        region.height(),
        region.width(),
        region.row_start,
        region.col_start,
        points_counted,
        average
    );

    Ok(GradientReport {
        region: *region,
        points_counted,
        gradient_total,
        average,
    })
}
