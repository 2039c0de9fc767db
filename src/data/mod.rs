/// Data layer: core types, loading, trimming and the per-chart views.
///
/// Architecture:
/// ```text
///   page-views .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → PageViews (sorted by date)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  2.5 / 97.5 percentile trim → FilteredDataset
///   └──────────┘
///        │
///        ├──────────────┬────────────────┐
///        ▼              ▼                ▼
///   (line chart)  ┌───────────┐    ┌─────────┐
///                 │ aggregate │    │ reshape │
///                 └───────────┘    └─────────┘
///                 MonthlyAggregate AnnotatedRecord
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod reshape;
