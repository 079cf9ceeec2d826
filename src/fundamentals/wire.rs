use serde::Deserialize;
use std::collections::BTreeMap;

use crate::core::wire::RawNum;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct TimeseriesEnvelope {
    pub(crate) timeseries: Option<TimeseriesNode>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesNode {
    pub(crate) result: Option<Vec<TimeseriesData>>,
    pub(crate) error: Option<TimeseriesError>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesError {
    pub(crate) code: Option<String>,
    pub(crate) description: Option<String>,
}

/// One requested type key. The values array sits under a key named after the
/// type itself (e.g. `annualTotalRevenue`), hence the flattened map. The
/// `timestamp` array lands there too and is ignored; `asOfDate` carries the period.
#[derive(Deserialize)]
pub(crate) struct TimeseriesData {
    pub(crate) meta: Option<TimeseriesMeta>,
    #[serde(flatten)]
    pub(crate) values: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesMeta {
    #[serde(rename = "type", default)]
    pub(crate) kind: Vec<String>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesValue {
    #[serde(rename = "asOfDate")]
    pub(crate) as_of_date: Option<String>,
    #[serde(rename = "reportedValue")]
    pub(crate) reported_value: Option<RawNum<f64>>,
}
