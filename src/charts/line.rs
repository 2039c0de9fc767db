use std::path::Path;

use chrono::{Days, NaiveDate};
use plotters::prelude::*;

use crate::color::LINE_RED;
use crate::data::model::FilteredDataset;
use crate::error::{DataError, Result};

use super::{DrawResult, FONT, value_headroom};

// ---------------------------------------------------------------------------
// Daily page-view line chart
// ---------------------------------------------------------------------------

pub const LINE_SIZE: (u32, u32) = (3200, 1000);
pub const LINE_TITLE: &str = "Daily freeCodeCamp Forum Page Views 5/2016-12/2019";
const LINE_WIDTH: u32 = 3;

/// Draw every trimmed record as one continuous series over the full date
/// range and write it to `path`.
pub fn draw_line_plot(dataset: &FilteredDataset, path: &Path) -> Result<()> {
    let (start, end) = dataset.date_range().ok_or(DataError::EmptyDataset)?;
    draw(dataset, start, end, path).map_err(|e| DataError::render("line plot", e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn draw(dataset: &FilteredDataset, start: NaiveDate, end: NaiveDate, path: &Path) -> DrawResult {
    // A single day still needs a non-empty axis.
    let end = if end > start { end } else { start + Days::new(1) };
    let y_top = value_headroom(f64::from(dataset.max_value().unwrap_or(0)));

    let root = BitMapBackend::new(path, LINE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(LINE_TITLE, (FONT, 34))
        .margin(40)
        .x_label_area_size(110)
        .y_label_area_size(170)
        .build_cartesian_2d(start..end, 0f64..y_top)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Page Views")
        .axis_desc_style((FONT, 28))
        .label_style((FONT, 28))
        .axis_style(BLACK.stroke_width(2))
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m").to_string())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    chart.draw_series(LineSeries::new(
        dataset
            .records()
            .iter()
            .map(|r| (r.date, f64::from(r.value))),
        LINE_RED.stroke_width(LINE_WIDTH),
    ))?;

    root.present()?;
    Ok(())
}
