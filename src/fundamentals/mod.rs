mod api;
mod keys;
mod wire;

use crate::core::{Frequency, StatementService, StatementTable, YfClient, YfError};

/// Fetches the income statement for `symbol` at the given frequency.
///
/// Returns `Ok(None)` when Yahoo answers without a timeseries result. A symbol
/// Yahoo does not know usually yields `Ok(Some(table))` with an empty table.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a non-2xx
/// status, Yahoo reports an error in the body, or the body cannot be decoded.
pub async fn income_statement(
    client: &YfClient,
    symbol: &str,
    frequency: Frequency,
) -> Result<Option<StatementTable>, YfError> {
    api::income_statement(client, symbol, frequency).await
}

impl StatementService for YfClient {
    fn fetch_income_statement<'a>(
        &'a self,
        symbol: &'a str,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<Option<StatementTable>, YfError>> + Send + 'a>,
    > {
        Box::pin(income_statement(self, symbol, Frequency::Annual))
    }
}
