use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;

use super::axis::{autoscale_range, y_range};
use super::spec::ChartSpec;
use crate::color::series_colors;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Presentation constants
// ---------------------------------------------------------------------------

/// How a chart looks, independent of what it shows.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Pixel size of the output image.
    pub size: (u32, u32),
    pub experiment_color: RGBColor,
    pub theory_color: RGBColor,
    pub line_width: u32,
    pub marker_radius: i32,
    /// Dash length and gap of the theory line, in pixels.
    pub dash: (u32, u32),
    pub experiment_label: String,
    pub theory_label: String,
}

impl ChartStyle {
    pub fn new(size: (u32, u32)) -> Self {
        let (experiment_color, theory_color) = series_colors();
        Self {
            size,
            experiment_color,
            theory_color,
            line_width: 2,
            marker_radius: 4,
            dash: (10, 6),
            experiment_label: "Эксперимент".into(),
            theory_label: "Теория".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw one experiment-vs-theory chart and write it as
/// `<output_dir>/<spec.filename>`, returning the written path.
///
/// Each call draws into its own pixel buffer, so nothing from a previous
/// chart leaks into the next one. A missing column fails with
/// [`TableError::MissingColumn`](crate::data::model::TableError) before
/// anything is written.
pub fn render_chart(
    table: &Table,
    spec: &ChartSpec,
    style: &ChartStyle,
    output_dir: &Path,
) -> Result<PathBuf> {
    let x = table.column(&spec.x_column)?;
    let experiment = table.column(&spec.experiment_column)?;
    let theory = table.column(&spec.theory_column)?;

    let (width, height) = style.size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    draw_chart(&mut buffer, spec, style, x, experiment, theory)
        .with_context(|| format!("drawing '{}'", spec.title))?;

    ensure_dir(output_dir)?;
    let path = output_dir.join(&spec.filename);
    let image = image::RgbImage::from_raw(width, height, buffer)
        .context("pixel buffer does not match figure size")?;
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!("Chart saved: {}", path.display());
    Ok(path)
}

fn draw_chart(
    buffer: &mut [u8],
    spec: &ChartSpec,
    style: &ChartStyle,
    x: &[f64],
    experiment: &[f64],
    theory: &[f64],
) -> Result<()> {
    let root = BitMapBackend::with_buffer(buffer, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = autoscale_range(&[x]);
    let y_bounds = y_range(spec.unit_interval, experiment, theory);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(&spec.title, ("sans-serif", 20))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_bounds)?;

    chart
        .configure_mesh()
        .x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .label_style(("sans-serif", 14))
        .draw()?;

    let experiment_points = points(x, experiment);
    let theory_points = points(x, theory);

    let experiment_line = style.experiment_color.stroke_width(style.line_width);
    let theory_line = style.theory_color.stroke_width(style.line_width);
    let (dash, gap) = style.dash;

    chart
        .draw_series(LineSeries::new(experiment_points.clone(), experiment_line))?
        .label(&style.experiment_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], experiment_line));
    chart.draw_series(
        experiment_points
            .iter()
            .map(|&p| Circle::new(p, style.marker_radius, style.experiment_color.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            theory_points.clone(),
            dash,
            gap,
            theory_line,
        ))?
        .label(&style.theory_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], theory_line));
    chart.draw_series(
        theory_points
            .iter()
            .map(|&p| Circle::new(p, style.marker_radius, style.theory_color.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Pair x with y, skipping rows where either value is missing.
fn points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect()
}

/// Single-level create; an existing directory is fine.
fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("creating output directory {}", dir.display())),
    }
}
