pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;

pub use app::{ChartFiles, ChartSet, run};
pub use config::Config;
pub use error::DataError;
