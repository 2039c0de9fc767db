use std::path::PathBuf;

use clap::Parser;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "fcc-forum-pageviews.csv";

/// Where to read page views from and where to write the charts.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pageview-charts")]
#[command(about = "Render line, bar and box charts of daily forum page views")]
pub struct Config {
    /// CSV file with `date` and `value` columns
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the PNG charts are written to
    #[arg(default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
        }
    }
}
