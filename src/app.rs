use std::path::PathBuf;

use thiserror::Error;

use crate::chart::render::{render_chart, ChartStyle};
use crate::chart::spec::standard_charts;
use crate::config::PlotConfig;
use crate::data::loader::{load_table, LoadError};

// ---------------------------------------------------------------------------
// Run errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RunError {
    /// Nothing was rendered.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Charts before `filename` were written, the rest were not attempted.
    #[error("rendering {filename} failed")]
    Render {
        filename: String,
        #[source]
        source: anyhow::Error,
    },
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Load the results table once, then render the five standard charts in
/// order. Stops at the first failure; returns the written paths on success.
pub fn run(config: &PlotConfig) -> Result<Vec<PathBuf>, RunError> {
    let table = match load_table(&config.input_path, config.delimiter) {
        Ok(table) => table,
        Err(e) => {
            log::error!("{e}");
            return Err(e.into());
        }
    };
    log::info!(
        "CSV file loaded: {} rows with columns {:?}",
        table.len(),
        table.column_names()
    );
    if table.is_empty() {
        log::warn!("{} has no data rows", config.input_path.display());
    }

    let style = ChartStyle::new(config.figure_size);
    let mut saved = Vec::new();

    for spec in standard_charts(&config.columns) {
        let path = render_chart(&table, &spec, &style, &config.output_dir).map_err(|source| {
            RunError::Render {
                filename: spec.filename.clone(),
                source,
            }
        })?;
        saved.push(path);
    }

    log::info!(
        "All charts created and saved in '{}'",
        config.output_dir.display()
    );
    Ok(saved)
}
