/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .xlsx bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → Table (or one LoadError)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  typed columns (Numeric | Text), stable row order
///   └──────────┘
///        │
///        ▼
///   analysis::{summary, search, detail, bins, ranking}
/// ```
pub mod loader;
pub mod model;
