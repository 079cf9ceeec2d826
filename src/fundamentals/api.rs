use chrono::{NaiveDate, Utc};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::{Frequency, StatementTable, YfClient, YfError, net, wire::from_raw};

use super::keys::{INCOME_STATEMENT_KEYS, pretty_label};
use super::wire::{TimeseriesEnvelope, TimeseriesValue};

/// First day covered by a timeseries request; Yahoo has nothing older for most tickers.
const PERIOD1_START: (i32, u32, u32) = (2016, 12, 31);

/// Fetches and assembles a statement from the /ws/fundamentals-timeseries endpoint.
///
/// This handles the common pattern of:
/// 1. Constructing the URL with one `<prefix><Key>` type per requested line item
/// 2. Appending the crumb when the handshake produced one
/// 3. Parsing the `TimeseriesEnvelope`
/// 4. Pivoting the per-key series into a period-by-line-item table
pub(super) async fn fetch_statement(
    client: &YfClient,
    symbol: &str,
    frequency: Frequency,
    keys: &[&str],
    endpoint_name: &str,
) -> Result<Option<StatementTable>, YfError> {
    let prefix = frequency.prefix();
    let type_str = keys
        .iter()
        .map(|k| format!("{prefix}{k}"))
        .collect::<Vec<_>>()
        .join(",");

    let (y, m, d) = PERIOD1_START;
    let start_ts = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or(0, |dt| dt.and_utc().timestamp());
    let end_ts = Utc::now().timestamp();

    let mut url = client.base_timeseries().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("type", &type_str)
        .append_pair("period1", &start_ts.to_string())
        .append_pair("period2", &end_ts.to_string());

    client.ensure_credentials().await;
    if let Some(crumb) = client.crumb().await {
        url.query_pairs_mut().append_pair("crumb", &crumb);
    }

    let endpoint = format!("timeseries_{endpoint_name}_{prefix}");
    let body = net::get_text(client.http(), url, &endpoint).await?;

    let envelope: TimeseriesEnvelope = serde_json::from_str(&body)?;
    assemble(envelope, prefix, keys)
}

/// Pivots a decoded envelope into a table.
///
/// Columns are every `asOfDate` seen, newest first. Rows follow `keys` order and
/// only keys with at least one reported value are kept.
pub(super) fn assemble(
    envelope: TimeseriesEnvelope,
    prefix: &str,
    keys: &[&str],
) -> Result<Option<StatementTable>, YfError> {
    let Some(node) = envelope.timeseries else {
        return Ok(None);
    };

    if let Some(err) = node.error {
        let desc = err
            .description
            .or(err.code)
            .unwrap_or_else(|| "unknown error".into());
        return Err(YfError::Data(format!("yahoo error: {desc}")));
    }

    let Some(result_vec) = node.result else {
        return Ok(None);
    };

    let mut series: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    let mut periods: BTreeSet<String> = BTreeSet::new();

    for mut item in result_vec {
        let type_key = item
            .meta
            .as_ref()
            .and_then(|m| m.kind.first().cloned())
            .or_else(|| {
                item.values
                    .keys()
                    .find(|k| k.starts_with(prefix))
                    .cloned()
            });
        let Some(type_key) = type_key else {
            continue;
        };
        let Some(key) = type_key.strip_prefix(prefix) else {
            continue;
        };
        if !keys.contains(&key) {
            continue;
        }
        let Some(values_json) = item.values.remove(&type_key) else {
            continue;
        };

        let values: Vec<Option<TimeseriesValue>> = serde_json::from_value(values_json)?;
        for v in values.into_iter().flatten() {
            if let (Some(date), Some(raw)) = (v.as_of_date, from_raw(v.reported_value)) {
                periods.insert(date.clone());
                series.entry(key.to_string()).or_default().insert(date, raw);
            }
        }
    }

    let columns: Vec<String> = periods.into_iter().rev().collect();
    let mut table = StatementTable::new(columns.clone());

    for key in keys {
        let Some(cells) = series.get(*key) else {
            continue;
        };
        let values = columns.iter().map(|c| cells.get(c).copied()).collect();
        table.push_row(*key, pretty_label(key), values)?;
    }

    Ok(Some(table))
}

#[tracing::instrument(skip(client), err)]
pub(super) async fn income_statement(
    client: &YfClient,
    symbol: &str,
    frequency: Frequency,
) -> Result<Option<StatementTable>, YfError> {
    let table = fetch_statement(
        client,
        symbol,
        frequency,
        INCOME_STATEMENT_KEYS,
        "income_statement",
    )
    .await?;

    match &table {
        Some(t) => tracing::debug!(
            rows = t.rows().len(),
            columns = t.columns().len(),
            "income statement assembled"
        ),
        None => tracing::debug!("timeseries returned no result"),
    }

    Ok(table)
}
