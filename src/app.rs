use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::charts::{self, BAR_FILE, BOX_FILE, LINE_FILE};
use crate::config::Config;
use crate::data::model::{AnnotatedRecord, FilteredDataset, MonthlyAggregate, PageViews};
use crate::data::{aggregate, filter, loader, reshape};

// ---------------------------------------------------------------------------
// Chart pipeline
// ---------------------------------------------------------------------------

/// The trimmed table and both derived views, ready to render.
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub filtered: FilteredDataset,
    pub monthly: Vec<MonthlyAggregate>,
    pub annotated: Vec<AnnotatedRecord>,
}

/// Paths of the written images.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFiles {
    pub line: PathBuf,
    pub bar: PathBuf,
    pub boxes: PathBuf,
}

impl ChartFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            line: dir.join(LINE_FILE),
            bar: dir.join(BAR_FILE),
            boxes: dir.join(BOX_FILE),
        }
    }
}

impl ChartSet {
    /// Trim outliers once and derive every view from the result. Nothing is
    /// written here, so a data error leaves no partial output.
    pub fn prepare(page_views: &PageViews) -> Result<Self> {
        let filtered = filter::trim_outliers(page_views).context("trimming outliers")?;
        let bounds = filtered.bounds();
        log::info!(
            "Kept {} of {} records within [{:.1}, {:.1}]",
            filtered.len(),
            filtered.source_len(),
            bounds.low,
            bounds.high
        );
        let monthly = aggregate::monthly_means(&filtered);
        let annotated = reshape::annotate(&filtered);
        log::info!(
            "Prepared {} monthly means and {} box-plot rows",
            monthly.len(),
            annotated.len()
        );
        Ok(Self {
            filtered,
            monthly,
            annotated,
        })
    }

    /// Render all three charts into `dir`.
    pub fn render(&self, dir: &Path) -> Result<ChartFiles> {
        let files = ChartFiles::in_dir(dir);
        charts::line::draw_line_plot(&self.filtered, &files.line).context("drawing line plot")?;
        charts::bar::draw_bar_plot(&self.monthly, &files.bar).context("drawing bar plot")?;
        charts::boxplot::draw_box_plot(&self.annotated, &files.boxes)
            .context("drawing box plot")?;
        Ok(files)
    }
}

/// Load the configured CSV and write the three charts.
pub fn run(config: &Config) -> Result<ChartFiles> {
    let page_views = loader::load_csv(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    let charts = ChartSet::prepare(&page_views)?;

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    charts.render(&config.output_dir)
}
