use std::path::Path;

use plotters::prelude::*;

use crate::color::tab10;
use crate::data::aggregate::years;
use crate::data::model::{Month, MonthlyAggregate};
use crate::error::{DataError, Result};

use super::{DrawResult, FONT, category_axis, category_label, value_headroom};

// ---------------------------------------------------------------------------
// Grouped bar chart of monthly means
// ---------------------------------------------------------------------------

pub const BAR_SIZE: (u32, u32) = (1514, 1330);
/// Share of each year's slot taken by its twelve bars.
const GROUP_WIDTH: f64 = 0.5;

/// Horizontal extent of the bar for `month` within the year centred on `year_pos`.
fn bar_span(year_pos: f64, month: Month) -> (f64, f64) {
    let width = GROUP_WIDTH / Month::ALL.len() as f64;
    let left = year_pos - GROUP_WIDTH / 2.0 + width * month.index() as f64;
    (left, left + width)
}

/// Draw one bar per (year, month) mean, grouped by year and coloured by
/// month, and write it to `path`.
pub fn draw_bar_plot(aggregates: &[MonthlyAggregate], path: &Path) -> Result<()> {
    if aggregates.is_empty() {
        return Err(DataError::EmptyDataset);
    }
    draw(aggregates, path).map_err(|e| DataError::render("bar plot", e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn draw(aggregates: &[MonthlyAggregate], path: &Path) -> DrawResult {
    let years = years(aggregates);
    let colors = tab10(Month::ALL.len());
    let y_top = value_headroom(aggregates.iter().map(|a| a.mean_value).fold(0.0, f64::max));

    let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .x_label_area_size(110)
        .y_label_area_size(150)
        .build_cartesian_2d(category_axis(years.len()), 0f64..y_top)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Years")
        .y_desc("Average Page Views")
        .axis_desc_style((FONT, 28))
        .label_style((FONT, 28))
        .x_label_style((FONT, 28).into_font().transform(FontTransform::Rotate90))
        .x_labels(years.len())
        .axis_style(BLACK.stroke_width(2))
        .x_label_formatter(&|x: &f64| category_label(&years, *x))
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    // Legend header; an unmarked entry reads as a title above the months.
    chart
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
        .label("Months");

    for month in Month::ALL {
        let color = colors[month.index()];
        let bars = aggregates
            .iter()
            .filter(|a| a.month == month)
            .filter_map(|a| {
                let pos = years.iter().position(|&y| y == a.year)? as f64;
                let (left, right) = bar_span(pos, month);
                Some(Rectangle::new(
                    [(left, 0.0), (right, a.mean_value)],
                    color.filled(),
                ))
            });

        chart
            .draw_series(bars)?
            .label(month.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 12), (x + 24, y + 12)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, 28))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_tile_the_group_in_month_order() {
        let (jan_left, jan_right) = bar_span(2.0, Month::January);
        let (feb_left, _) = bar_span(2.0, Month::February);
        let (_, dec_right) = bar_span(2.0, Month::December);
        assert!((jan_left - 1.75).abs() < 1e-12);
        assert!((feb_left - jan_right).abs() < 1e-12);
        assert!((dec_right - 2.25).abs() < 1e-12);
    }
}
