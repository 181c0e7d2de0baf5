//! Flat-file parsing with column type inference.

use std::path::Path;

use rusqlite::types::Value;

use crate::error::{StoreError, StoreResult};

/// Storage class inferred for a column from its cell contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
}

impl ColumnKind {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnKind::Integer => "INTEGER",
            ColumnKind::Real => "REAL",
            ColumnKind::Text => "TEXT",
        }
    }

    fn admits(self, cell: &str) -> bool {
        match self {
            ColumnKind::Integer => cell.parse::<i64>().is_ok(),
            ColumnKind::Real => cell.parse::<f64>().is_ok(),
            ColumnKind::Text => true,
        }
    }

    /// Narrowest kind admitting every non-empty cell.
    fn infer<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> ColumnKind {
        [ColumnKind::Integer, ColumnKind::Real]
            .into_iter()
            .find(|kind| cells.clone().filter(|c| !c.is_empty()).all(|c| kind.admits(c)))
            .unwrap_or(ColumnKind::Text)
    }

    fn convert(self, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        let parsed = match self {
            ColumnKind::Integer => cell.parse().ok().map(Value::Integer),
            ColumnKind::Real => cell.parse().ok().map(Value::Real),
            ColumnKind::Text => None,
        };
        parsed.unwrap_or_else(|| Value::Text(cell.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A flat file parsed into typed rows, ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl ParsedTable {
    /// Read a CSV file with a header row. All-empty columns load as TEXT.
    pub fn from_csv(name: &str, path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let csv_err = |source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(csv_err)?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        let columns: Vec<Column> = headers
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Column {
                name,
                kind: ColumnKind::infer(records.iter().map(move |r| r.get(idx).unwrap_or(""))),
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(idx, column)| column.kind.convert(record.get(idx).unwrap_or("")))
                    .collect()
            })
            .collect();

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_narrowest_kind() {
        assert_eq!(ColumnKind::infer(["1", "22", ""].into_iter()), ColumnKind::Integer);
        assert_eq!(ColumnKind::infer(["1", "2.50"].into_iter()), ColumnKind::Real);
        assert_eq!(ColumnKind::infer(["1", "pending"].into_iter()), ColumnKind::Text);
        assert_eq!(
            ColumnKind::infer(["2024-01-01T00:00:00"].into_iter()),
            ColumnKind::Text
        );
    }

    #[test]
    fn converts_cells() {
        assert_eq!(ColumnKind::Integer.convert("42"), Value::Integer(42));
        assert_eq!(ColumnKind::Real.convert("12.50"), Value::Real(12.5));
        assert_eq!(ColumnKind::Real.convert(""), Value::Null);
        assert_eq!(ColumnKind::Text.convert("x"), Value::Text("x".to_string()));
    }
}
