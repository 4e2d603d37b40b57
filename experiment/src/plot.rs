use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::anyhow;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::report::millis;
use crate::Row;

/// Width and height of the rendered image in pixels
pub const IMAGE_SIZE: (u32, u32) = (1600, 700);

const SERIES: [(&str, RGBColor); 3] = [
    ("BST (Random Order)", BLUE),
    ("BST (Balanced Order)", RED),
    ("BTreeSet", GREEN),
];

/// Draws insertion times and deletion times against input size side by side, one line per
/// container, and saves the image to `path`
///
/// The image format follows the file extension.
pub fn plot<P: AsRef<Path>>(rows: &[Row], path: P) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path.as_ref(), IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let panels = root.split_evenly((1, 2));
    draw_panel(&panels[0], "Insertion Time Comparison", "Insertion Time (ms)", rows,
        |row| [row.random_insert, row.balanced_insert, row.reference_insert])?;
    draw_panel(&panels[1], "Deletion Time Comparison", "Deletion Time (ms)", rows,
        |row| [row.random_delete, row.balanced_delete, row.reference_delete])?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn draw_panel<F>(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    y_desc: &str,
    rows: &[Row],
    times: F,
) -> anyhow::Result<()>
    where F: Fn(&Row) -> [Duration; 3],
{
    let mut points: [Vec<(f64, f64)>; 3] = Default::default();
    for row in rows {
        for (series, &time) in points.iter_mut().zip(times(row).iter()) {
            series.push((row.size as f64, millis(time)));
        }
    }

    // Keep both ranges non-empty so a single row or all-zero timings still plot
    let max_size = rows.iter().map(|row| row.size as f64).fold(1.0, f64::max);
    let max_time = points.iter().flatten().map(|&(_, time)| time).fold(1e-3, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_size, 0f64..max_time * 1.05)
        .map_err(plot_error)?;

    chart.configure_mesh()
        .x_desc("Input Size")
        .y_desc(y_desc)
        .draw()
        .map_err(plot_error)?;

    for (&(label, color), series) in SERIES.iter().zip(points.iter()) {
        let style = color.stroke_width(2);
        chart.draw_series(LineSeries::new(series.iter().copied(), style))
            .map_err(plot_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        chart.draw_series(series.iter().map(|&point| Circle::new(point, 3, color.filled())))
            .map_err(plot_error)?;
    }

    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    Ok(())
}

fn plot_error<E: fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("failed to draw plot: {}", err)
}
