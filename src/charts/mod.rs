/// Static PNG renderers, one per chart.
///
/// Every renderer opens its own bitmap backend, draws, and presents the
/// file before returning.
pub mod bar;
pub mod boxplot;
pub mod line;

use std::ops::Range;

pub const LINE_FILE: &str = "line_plot.png";
pub const BAR_FILE: &str = "bar_plot.png";
pub const BOX_FILE: &str = "box_plot.png";

pub(crate) const FONT: &str = "sans-serif";

pub(crate) type DrawResult<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Numeric axis for `n` categories: category `i` is centred on `i`. Asking
/// the mesh for `n` labels puts one tick on every integer position.
pub(crate) fn category_axis(n: usize) -> Range<f64> {
    -0.5..(n.max(1) as f64 - 0.5)
}

/// Label of the category centred on `x`; empty between categories.
pub(crate) fn category_label<T: ToString>(labels: &[T], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|l| l.to_string())
        .unwrap_or_default()
}

/// Upper end of a value axis leaving some room above the tallest value.
pub(crate) fn value_headroom(max: f64) -> f64 {
    if max > 0.0 { max * 1.05 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use plotters::coord::types::RangedCoordf64;
    use plotters::prelude::Ranged;

    use super::*;

    #[test]
    fn category_axis_ticks_every_category() {
        for n in 1..=12 {
            let axis = RangedCoordf64::from(category_axis(n));
            let ticks: Vec<i64> = axis.key_points(n).iter().map(|t| t.round() as i64).collect();
            assert_eq!(ticks, (0..n as i64).collect::<Vec<_>>(), "{n} categories");
        }
    }

    #[test]
    fn category_label_rounds_to_nearest() {
        let labels = ["2016", "2017", "2018"];
        assert_eq!(category_label(&labels, 0.0), "2016");
        assert_eq!(category_label(&labels, 1.0), "2017");
        assert_eq!(category_label(&labels, 1.5), "");
        assert_eq!(category_label(&labels, 2.0), "2018");
        assert_eq!(category_label(&labels, 3.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn headroom_never_zero() {
        assert_eq!(value_headroom(0.0), 1.0);
        assert!((value_headroom(100.0) - 105.0).abs() < 1e-9);
    }
}
