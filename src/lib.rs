#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod io;
pub mod region;
pub mod render;
pub mod scalar;
pub mod view;

pub use crate::error::GridError;
pub use crate::gradient::GradientReport;
pub use crate::grid::Grid2D;
pub use crate::region::Region;
pub use crate::render::RenderOptions;
pub use crate::scalar::Scalar;
pub use crate::view::FieldView;

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{FieldView, Grid2D, GridError, Region, Scalar};
}
