//! Fixed-precision text table for printing fields.
use crate::view::FieldView;
use serde::Deserialize;
use std::fmt::{Display, Write};

/// Options controlling table rendering.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Digits after the decimal point (ignored by integer types).
    pub precision: usize,
    /// Separator written before, between and after cells.
    pub delimiter: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: 1,
            delimiter: "|".to_string(),
        }
    }
}

/// Render one line per row: `| v | v | ... |`.
pub fn render_table<V>(view: &V, options: &RenderOptions) -> String
where
    V: FieldView,
    V::Value: Display,
{
    let mut out = String::new();
    let prec = options.precision;
    let delim = options.delimiter.as_str();
    for row in view.row_iter() {
        out.push_str(delim);
        for v in row {
            // writing to a String never fails
            let _ = write!(out, " {v:.prec$} {delim}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid2D;

    #[test]
    fn table_matches_dimensions() {
        let mut g: Grid2D<f32> = Grid2D::new(2, 3);
        g.set_value(0, 0, 10.0);
        g.set_value(1, 2, -2.3);
        let text = g.render();
        assert_eq!(text, "| 10.0 | 0.0 | 0.0 |\n| 0.0 | 0.0 | -2.3 |\n");
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn integers_ignore_precision() {
        let g = Grid2D::from_rows(&[vec![1i32, 22]]).unwrap();
        let options = RenderOptions {
            precision: 3,
            delimiter: ";".to_string(),
        };
        assert_eq!(g.render_with(&options), "; 1 ; 22 ;\n");
        assert_eq!(format!("{g:.4}"), "| 1 | 22 |\n");
    }

    #[test]
    fn display_honours_precision() {
        let g = Grid2D::from_rows(&[vec![0.5f64]]).unwrap();
        assert_eq!(format!("{g:.3}"), "| 0.500 |\n");
        assert_eq!(g.to_string(), "| 0.5 |\n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let g: Grid2D<f32> = Grid2D::new(0, 4);
        assert!(g.render().is_empty());
    }
}
