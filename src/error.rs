use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading, trimming or rendering page-view data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read CSV {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed CSV row {row}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("no page-view records to chart")]
    EmptyDataset,

    #[error("rendering {chart} failed: {message}")]
    Render { chart: &'static str, message: String },
}

impl DataError {
    /// Wrap a plotters drawing error. The backend error type is generic over
    /// the backend, so only its message is kept.
    pub fn render(chart: &'static str, err: impl std::fmt::Display) -> Self {
        DataError::Render {
            chart,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
