//! JSON configuration for the `gradient_report` tool.
use crate::region::Region;
use crate::render::RenderOptions;
use crate::{Grid2D, GridError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct FieldToolConfig {
    /// Field samples, one inner array per row.
    pub field: Vec<Vec<f64>>,
    /// Window to average over; the whole field when absent.
    #[serde(default)]
    pub region: Option<Region>,
    /// Resize steps applied (in order) after the report is computed.
    #[serde(default)]
    pub resize: Vec<ResizeStep>,
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ResizeStep {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

impl FieldToolConfig {
    pub fn build_grid(&self) -> Result<Grid2D<f64>, GridError> {
        Grid2D::from_rows(&self.field)
    }
}

pub fn load_config(path: &Path) -> Result<FieldToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<FieldToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
