use std::path::Path;

use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::{husl_palette, tab10};
use crate::data::model::AnnotatedRecord;
use crate::data::reshape::{BoxStats, by_month, by_year};
use crate::error::{DataError, Result};

use super::{DrawResult, FONT, category_axis, category_label};

// ---------------------------------------------------------------------------
// Year-wise and month-wise box plots, side by side
// ---------------------------------------------------------------------------

pub const BOX_SIZE: (u32, u32) = (2880, 1080);
/// Shared value axis of both panels.
pub const Y_MAX: u32 = 200_000;
pub const Y_TICK_STEP: u32 = 20_000;

const BOX_HALF_WIDTH: f64 = 0.4;
const CAP_HALF_WIDTH: f64 = 0.2;
const FLIER_RADIUS: i32 = 4;

/// Tick positions of the value axis: 0, 20000, …, 200000 whatever the data.
pub fn y_ticks() -> Vec<u32> {
    (0..=Y_MAX).step_by(Y_TICK_STEP as usize).collect()
}

/// Value range shared by both panels.
fn value_axis() -> Range<f64> {
    0f64..f64::from(Y_MAX)
}

/// Label count that makes the mesh place its ticks exactly on [`y_ticks`].
fn value_labels() -> usize {
    (Y_MAX / Y_TICK_STEP) as usize + 1
}

/// One labelled box.
struct Group {
    label: String,
    color: RGBColor,
    stats: Option<BoxStats>,
}

/// Draw the trend (by year) and seasonality (by month) box plots and write
/// them to `path`.
pub fn draw_box_plot(rows: &[AnnotatedRecord], path: &Path) -> Result<()> {
    if rows.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let years = by_year(rows);
    let year_colors = tab10(years.len());
    let year_groups: Vec<Group> = years
        .iter()
        .zip(year_colors)
        .map(|((year, values), color)| Group {
            label: year.to_string(),
            color,
            stats: BoxStats::from_values(values),
        })
        .collect();

    let months = by_month(rows);
    let month_colors = husl_palette(months.len());
    let month_groups: Vec<Group> = months
        .iter()
        .zip(month_colors)
        .map(|((month, values), color)| Group {
            label: month.abbrev().to_string(),
            color,
            stats: BoxStats::from_values(values),
        })
        .collect();

    draw(&year_groups, &month_groups, path).map_err(|e| DataError::render("box plot", e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn draw(year_groups: &[Group], month_groups: &[Group], path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, BOX_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (left, right) = root.split_horizontally((BOX_SIZE.0 / 2) as i32);
    draw_panel(&left, "Year-wise Box Plot (Trend)", "Year", year_groups)?;
    draw_panel(&right, "Month-wise Box Plot (Seasonality)", "Month", month_groups)?;

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    x_desc: &str,
    groups: &[Group],
) -> DrawResult {
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 26))
        .margin(40)
        .x_label_area_size(70)
        .y_label_area_size(120)
        .build_cartesian_2d(category_axis(groups.len()), value_axis())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc("Page Views")
        .axis_desc_style((FONT, 21))
        .label_style((FONT, 21))
        .x_labels(groups.len())
        .y_labels(value_labels())
        .x_label_formatter(&|x: &f64| category_label(&labels, *x))
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    for (i, group) in groups.iter().enumerate() {
        let Some(stats) = &group.stats else {
            continue;
        };
        let x = i as f64;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - BOX_HALF_WIDTH, stats.q1), (x + BOX_HALF_WIDTH, stats.q3)],
            group.color.filled(),
        )))?;

        let outline = BLACK.stroke_width(2);
        chart.draw_series(
            [
                // box outline
                vec![
                    (x - BOX_HALF_WIDTH, stats.q1),
                    (x + BOX_HALF_WIDTH, stats.q1),
                    (x + BOX_HALF_WIDTH, stats.q3),
                    (x - BOX_HALF_WIDTH, stats.q3),
                    (x - BOX_HALF_WIDTH, stats.q1),
                ],
                vec![(x - BOX_HALF_WIDTH, stats.median), (x + BOX_HALF_WIDTH, stats.median)],
                vec![(x, stats.q3), (x, stats.whisker_high)],
                vec![(x, stats.q1), (x, stats.whisker_low)],
                vec![(x - CAP_HALF_WIDTH, stats.whisker_high), (x + CAP_HALF_WIDTH, stats.whisker_high)],
                vec![(x - CAP_HALF_WIDTH, stats.whisker_low), (x + CAP_HALF_WIDTH, stats.whisker_low)],
            ]
            .into_iter()
            .map(|points| PathElement::new(points, outline)),
        )?;

        chart.draw_series(stats.fliers.iter().map(|&v| {
            EmptyElement::at((x, v))
                + Polygon::new(
                    vec![
                        (0, -FLIER_RADIUS),
                        (FLIER_RADIUS - 1, 0),
                        (0, FLIER_RADIUS),
                        (1 - FLIER_RADIUS, 0),
                    ],
                    BLACK.filled(),
                )
        }))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use plotters::coord::types::RangedCoordf64;
    use plotters::prelude::Ranged;

    use super::*;

    #[test]
    fn ticks_are_fixed_twenty_thousand_steps() {
        let ticks = y_ticks();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first(), Some(&0));
        assert_eq!(ticks.last(), Some(&200_000));
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == 20_000));
    }

    #[test]
    fn drawn_value_axis_ticks_match_fixed_steps() {
        let axis = RangedCoordf64::from(value_axis());
        let drawn: Vec<u32> = axis
            .key_points(value_labels())
            .iter()
            .map(|t| t.round() as u32)
            .collect();
        assert_eq!(drawn, y_ticks());
    }
}
