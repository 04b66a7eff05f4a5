/// Data layer: the in-memory table and the loader that fills it.
///
/// Architecture:
/// ```text
///  simulation_results.csv  (';'-delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table   (NotFound / Read on failure)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  column name → Vec<f64>, read-only after load
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
