use log::info;
use scalar_field::config::{load_config, FieldToolConfig};
use scalar_field::io::write_json_file;
use scalar_field::{GradientReport, Grid2D, Region};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut grid = config
        .build_grid()
        .map_err(|e| format!("Invalid field in {config_path}: {e}"))?;
    println!("Field {}x{}:", grid.rows(), grid.cols());
    print!("{}", grid.render_with(&config.render));

    let region = resolve_region(&config, &grid)?;
    let report = grid
        .gradient_report(&region)
        .map_err(|e| format!("Gradient failed: {e}"))?;
    println!(
        "Average gradient over rows [{}, {}] cols [{}, {}]: {:.5} ({} points)",
        region.row_start,
        region.row_end,
        region.col_start,
        region.col_end,
        report.average,
        report.points_counted
    );

    let mut resized = Vec::with_capacity(config.resize.len());
    for step in &config.resize {
        grid.try_resize(step.rows, step.cols)
            .map_err(|e| format!("Resize to {}x{} failed: {e}", step.rows, step.cols))?;
        info!("resized field to {}x{}", step.rows, step.cols);
        println!("\nResized to {}x{}:", step.rows, step.cols);
        print!("{}", grid.render_with(&config.render));
        resized.push([step.rows, step.cols]);
    }

    if let Some(path) = &config.output.json_out {
        let summary = ReportSummary {
            input_rows: config.field.len(),
            input_cols: config.field.first().map_or(0, Vec::len),
            gradient: report,
            resized,
            final_rows: grid.rows(),
            final_cols: grid.cols(),
        };
        write_json_file(path, &summary)?;
        println!("Wrote gradient report to {}", path.display());
    }

    Ok(())
}

fn resolve_region(config: &FieldToolConfig, grid: &Grid2D<f64>) -> Result<Region, String> {
    match config.region {
        Some(region) => Ok(region),
        None => Region::full(grid.rows(), grid.cols())
            .ok_or_else(|| "Field is empty; nothing to average".to_string()),
    }
}

fn usage() -> String {
    "Usage: gradient_report <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportSummary {
    input_rows: usize,
    input_cols: usize,
    gradient: GradientReport<f64>,
    resized: Vec<[usize; 2]>,
    final_rows: usize,
    final_cols: usize,
}
