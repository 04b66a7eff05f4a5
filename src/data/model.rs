use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – lookup failures after loading
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("column '{0}' not found in table")]
    MissingColumn(String),

    #[error("column '{column}' is not numeric (line {line}: '{value}')")]
    NotNumeric {
        column: String,
        line: u64,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Column – one parsed header column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// One value per data row; missing cells are `NaN`.
    Numeric(Vec<f64>),
    /// First cell that did not parse as a number.
    Text { line: u64, value: String },
}

// ---------------------------------------------------------------------------
// Table – the complete loaded results file
// ---------------------------------------------------------------------------

/// Columns addressed by header name.
///
/// Columns are not checked against any expected schema when the table is
/// built, only when a chart asks for them: an absent column and a text
/// column both fail at [`Table::column`].
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Header names in file order.
    column_names: Vec<String>,
    /// column_name → parsed column.
    columns: BTreeMap<String, Column>,
    rows: usize,
}

impl Table {
    /// Build a table from `(name, column)` pairs in header order.
    ///
    /// Numeric columns must hold exactly `rows` values; the loader gets this
    /// for free from the CSV reader rejecting ragged rows.
    pub fn new(columns: Vec<(String, Column)>, rows: usize) -> Self {
        debug_assert!(columns.iter().all(|(_, c)| match c {
            Column::Numeric(v) => v.len() == rows,
            Column::Text { .. } => true,
        }));

        let column_names = columns.iter().map(|(name, _)| name.clone()).collect();
        Table {
            column_names,
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Build an all-numeric table from `(name, values)` pairs.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Self {
        let rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        let columns = columns
            .into_iter()
            .map(|(name, values)| (name, Column::Numeric(values)))
            .collect();
        Table::new(columns, rows)
    }

    /// Values of a numeric column.
    pub fn column(&self, name: &str) -> Result<&[f64], TableError> {
        match self.columns.get(name) {
            Some(Column::Numeric(values)) => Ok(values.as_slice()),
            Some(Column::Text { line, value }) => Err(TableError::NotNumeric {
                column: name.to_string(),
                line: *line,
                value: value.clone(),
            }),
            None => Err(TableError::MissingColumn(name.to_string())),
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            ("Lambda".into(), vec![1.0, 2.0, 3.0]),
            ("P0_Эксп".into(), vec![0.6, 0.45, 0.3]),
        ])
    }

    #[test]
    fn looks_up_columns_by_name() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column("P0_Эксп").unwrap(), &[0.6, 0.45, 0.3]);
        assert_eq!(table.column_names(), &["Lambda", "P0_Эксп"]);
    }

    #[test]
    fn missing_column_is_a_lookup_error() {
        let table = sample();
        assert_eq!(
            table.column("P0_Теор"),
            Err(TableError::MissingColumn("P0_Теор".into()))
        );
    }

    #[test]
    fn text_column_fails_only_on_lookup() {
        let table = Table::new(
            vec![
                ("Lambda".into(), Column::Numeric(vec![1.0, 2.0])),
                (
                    "Note".into(),
                    Column::Text {
                        line: 2,
                        value: "run-a".into(),
                    },
                ),
            ],
            2,
        );
        assert_eq!(table.column("Lambda").unwrap(), &[1.0, 2.0]);
        assert_eq!(
            table.column("Note"),
            Err(TableError::NotNumeric {
                column: "Note".into(),
                line: 2,
                value: "run-a".into(),
            })
        );
    }

    #[test]
    fn header_only_table_is_empty() {
        let table = Table::from_columns(vec![("Lambda".into(), Vec::new())]);
        assert!(table.is_empty());
        assert!(table.column("Lambda").unwrap().is_empty());
    }
}
