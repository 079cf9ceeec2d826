use std::fmt;

use crate::core::YfError;

/* ----- FREQUENCY (shared by fundamentals/ and the report) ----- */

/// Reporting frequency of a financial statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frequency {
    /// Fiscal-year statements.
    #[default]
    Annual,
    /// Fiscal-quarter statements.
    Quarterly,
    /// Trailing twelve months.
    Trailing,
}

impl Frequency {
    /// The type-key prefix Yahoo uses for this frequency.
    pub(crate) const fn prefix(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
            Self::Trailing => "trailing",
        }
    }
}

/* ----- STATEMENT TABLE ----- */

/// One line item of a statement, with one value per reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    /// Provider key of the line item (e.g. `TotalRevenue`).
    pub key: String,
    /// Human-readable label (e.g. `Total Revenue`).
    pub label: String,
    /// Values aligned with the table's columns; `None` where the period has no figure.
    pub values: Vec<Option<f64>>,
}

/// A financial statement laid out as a table: rows are line items, columns are
/// reporting periods.
///
/// The `Display` impl renders a plain-text table with the row labels in the
/// first column and periods across the top. Missing values print as `NaN`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementTable {
    columns: Vec<String>,
    rows: Vec<StatementRow>,
}

impl StatementTable {
    /// Creates a table with the given column (period) labels and no rows.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`YfError::Data`] if `values` does not have one entry per column.
    pub fn push_row(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), YfError> {
        let label = label.into();
        if values.len() != self.columns.len() {
            return Err(YfError::Data(format!(
                "row '{label}' has {} values for {} columns",
                values.len(),
                self.columns.len()
            )));
        }
        self.rows.push(StatementRow {
            key: key.into(),
            label,
            values,
        });
        Ok(())
    }

    /// Builder-style variant of [`push_row`](Self::push_row) where the key is the label.
    ///
    /// # Errors
    ///
    /// Same as [`push_row`](Self::push_row).
    pub fn with_row(mut self, label: &str, values: Vec<Option<f64>>) -> Result<Self, YfError> {
        self.push_row(label, label, values)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[StatementRow] {
        &self.rows
    }

    /// Looks up a row by provider key or by label.
    pub fn row(&self, name: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.key == name || r.label == name)
    }

    /// Value of the line item `name` in column `column`, if both exist and the cell is filled.
    pub fn value(&self, name: &str, column: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.row(name).and_then(|r| r.values.get(idx).copied().flatten())
    }

    /// A table is empty when it has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

fn format_value(v: Option<f64>) -> String {
    match v {
        Some(x) if !x.is_nan() => x.to_string(),
        _ => "NaN".to_string(),
    }
}

impl fmt::Display for StatementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.values.iter().copied().map(format_value).collect())
            .collect();

        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i).map(String::len))
                    .chain(std::iter::once(col.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:width$}", "", width = label_width)?;
        for (col, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {col:>width$}", width = *w)?;
        }

        for (row, row_cells) in self.rows.iter().zip(&cells) {
            writeln!(f)?;
            write!(f, "{:<width$}", row.label, width = label_width)?;
            for (cell, w) in row_cells.iter().zip(&widths) {
                write!(f, "  {cell:>width$}", width = *w)?;
            }
        }

        Ok(())
    }
}
