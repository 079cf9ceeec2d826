//! The fetch-and-print routine: ask the provider for a ticker's income
//! statement and write either a "no data" notice or the rendered table.

use std::io::Write;

use crate::core::{StatementService, YfError};

/// The ticker the binary reports on (Tata Steel, National Stock Exchange of India).
pub const SYMBOL: &str = "TATASTEEL.NS";

/// Line printed when the provider returns nothing or an empty table.
pub const NO_DATA_MESSAGE: &str = "No balance sheet data returned.";

/// Which of the two success paths a run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The provider returned no statement, or an empty one.
    NoData,
    /// A statement was printed.
    Printed {
        /// Line items printed.
        rows: usize,
        /// Reporting periods printed.
        columns: usize,
    },
}

/// Header line written above the table. The statement is an income statement;
/// the "Balance Sheet" wording is what the program has always printed.
pub fn header(symbol: &str) -> String {
    format!("Balance Sheet — {symbol}")
}

/// Fetches the income statement for `symbol` from `service` and writes it to `out`.
///
/// Nothing is written when the fetch fails.
///
/// # Errors
///
/// Returns the provider's error unchanged, or [`YfError::Io`] if writing to `out` fails.
#[tracing::instrument(skip(service, out), err)]
pub async fn run<S, W>(service: &S, symbol: &str, out: &mut W) -> Result<Outcome, YfError>
where
    S: StatementService + ?Sized,
    W: Write,
{
    let statement = service.fetch_income_statement(symbol).await?;

    let outcome = match statement {
        Some(table) if !table.is_empty() => {
            writeln!(out, "{}\n", header(symbol))?;
            writeln!(out, "{table}")?;
            Outcome::Printed {
                rows: table.rows().len(),
                columns: table.columns().len(),
            }
        }
        _ => {
            writeln!(out, "{NO_DATA_MESSAGE}")?;
            Outcome::NoData
        }
    };
    out.flush()?;

    tracing::info!(?outcome, "report written");
    Ok(outcome)
}
