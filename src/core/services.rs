use crate::core::{StatementTable, YfError};

/// A trait for services that can fetch a company's income statement.
///
/// This decouples the report routine from the Yahoo client, making it easy to
/// substitute an in-memory provider in tests. It is implemented by [`YfClient`](crate::YfClient).
pub trait StatementService: Send + Sync {
    /// Asynchronously fetches the annual income statement for `symbol`.
    ///
    /// # Returns
    /// A `Future` that resolves to `Ok(None)` when the provider returned no
    /// statement at all, `Ok(Some(table))` otherwise (the table may still be
    /// empty), or a `YfError` on failure.
    fn fetch_income_statement<'a>(
        &'a self,
        symbol: &'a str,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<Option<StatementTable>, YfError>> + Send + 'a>,
    >;
}
