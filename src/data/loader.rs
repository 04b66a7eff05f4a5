use std::error::Error as StdError;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Column, Table};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure at the load boundary. Nothing is rendered after either kind.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV file not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// Permission, encoding, ragged rows, an empty file and a file with no
    /// numeric column at all land here.
    #[error("failed to read CSV file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl LoadError {
    fn read(path: &Path, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        LoadError::Read {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// The header row is missing or empty.
#[derive(Debug, Error)]
#[error("no columns to parse from file")]
pub struct NoColumns;

/// A data cell that does not parse as a number.
#[derive(Debug, Clone, Error)]
#[error("line {line}, column '{column}': '{value}' is not a number")]
pub struct CellError {
    pub line: u64,
    pub column: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited results file into a [`Table`].
///
/// Layout: one header row naming the columns, then one observation per cell.
/// Empty cells become `NaN`. A column with any other non-numeric cell is kept
/// as [`Column::Text`] and only fails when a chart asks for it; if no column
/// is numeric (typically a wrong delimiter) the load itself fails with
/// [`LoadError::Read`].
pub fn load_table(path: &Path, delimiter: u8) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::read(path, e),
    })?;

    read_table(file, delimiter).map_err(|e| LoadError::read(path, e))
}

fn read_table<R: io::Read>(
    source: R,
    delimiter: u8,
) -> Result<Table, Box<dyn StdError + Send + Sync>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        return Err(NoColumns.into());
    }

    let mut parsed: Vec<Result<Vec<f64>, CellError>> = vec![Ok(Vec::new()); headers.len()];
    let mut rows = 0;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows += 1;

        for (col_idx, cell) in record.iter().enumerate() {
            let Ok(values) = &mut parsed[col_idx] else {
                continue;
            };
            match parse_cell(cell) {
                Some(value) => values.push(value),
                None => {
                    parsed[col_idx] = Err(CellError {
                        line,
                        column: headers[col_idx].clone(),
                        value: cell.to_string(),
                    })
                }
            }
        }
    }

    if rows > 0 && parsed.iter().all(Result::is_err) {
        if let Some(Err(first)) = parsed.into_iter().next() {
            return Err(first.into());
        }
        return Err(NoColumns.into());
    }

    let columns = headers
        .into_iter()
        .zip(parsed)
        .map(|(name, column)| {
            let column = match column {
                Ok(values) => Column::Numeric(values),
                Err(e) => Column::Text {
                    line: e.line,
                    value: e.value,
                },
            };
            (name, column)
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn parse_cell(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}
