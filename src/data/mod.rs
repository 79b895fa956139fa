/// Data layer: roster types, parsing, statistics, grouping and output.
///
/// Architecture:
/// ```text
///  roster .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean / population stddev, grade ladder
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ grouping  │  distribution + per-grade groups
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  annotated rows → output file
///   └──────────┘
/// ```
///
/// `processor` drives the stages in order.

pub mod error;
pub mod grouping;
pub mod loader;
pub mod model;
pub mod processor;
pub mod stats;
pub mod summary;
pub mod writer;
