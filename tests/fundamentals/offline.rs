use yfstatement::{Frequency, NO_DATA_MESSAGE, Outcome, fundamentals, report};

use crate::common::{client_for, fixture, mock_cookie_crumb, mock_timeseries};

const SYM: &str = "TATASTEEL.NS";

fn income_fixture() -> String {
    fixture("timeseries_income_statement_annual", SYM, "json")
}

#[tokio::test]
async fn offline_income_statement_uses_recorded_fixture() {
    let server = httpmock::MockServer::start();
    let (cookie, crumb) = mock_cookie_crumb(&server);
    let mock = mock_timeseries(&server, SYM, income_fixture());

    let client = client_for(&server);
    let table = fundamentals::income_statement(&client, SYM, Frequency::Annual)
        .await
        .unwrap()
        .expect("fixture carries a timeseries result");

    cookie.assert();
    crumb.assert();
    mock.assert();

    assert_eq!(table.columns(), ["2024-03-31", "2023-03-31"]);

    let labels: Vec<&str> = table.rows().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Total Revenue", "Net Income", "Diluted EPS", "EBITDA"]);

    assert_eq!(table.value("TotalRevenue", "2024-03-31"), Some(2_291_707_100_000.0));
    assert_eq!(table.value("NetIncome", "2024-03-31"), Some(-49_099_400_000.0));
    assert_eq!(table.value("DilutedEPS", "2023-03-31"), Some(7.17));
    assert_eq!(table.value("EBITDA", "2023-03-31"), None);
    assert!(table.row("GrossProfit").is_none(), "keys without values are dropped");
}

#[tokio::test]
async fn offline_report_prints_header_then_table() {
    let server = httpmock::MockServer::start();
    let _auth = mock_cookie_crumb(&server);
    let mock = mock_timeseries(&server, SYM, income_fixture());

    let client = client_for(&server);
    let mut out = Vec::new();
    let outcome = report::run(&client, SYM, &mut out).await.unwrap();
    mock.assert();

    assert_eq!(outcome, Outcome::Printed { rows: 4, columns: 2 });

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Balance Sheet — TATASTEEL.NS\n\n"), "{text}");
    assert!(text.ends_with('\n'));
    for label in ["Total Revenue", "Net Income", "Diluted EPS", "EBITDA"] {
        assert!(text.contains(label), "missing {label} in:\n{text}");
    }
    assert!(text.contains("2291707100000"));
    assert!(text.contains("-3.62"));
    assert!(text.contains("NaN"), "EBITDA has no 2023 figure");
    assert!(!text.contains(NO_DATA_MESSAGE));
}

#[tokio::test]
async fn offline_report_is_byte_identical_across_runs() {
    let server = httpmock::MockServer::start();
    let _auth = mock_cookie_crumb(&server);
    let mock = mock_timeseries(&server, SYM, income_fixture());

    let client = client_for(&server);
    let mut first = Vec::new();
    let mut second = Vec::new();
    report::run(&client, SYM, &mut first).await.unwrap();
    report::run(&client, SYM, &mut second).await.unwrap();

    assert_eq!(mock.hits(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn offline_unknown_symbol_reports_no_data() {
    let server = httpmock::MockServer::start();
    let _auth = mock_cookie_crumb(&server);
    let sym = "NOPE.NS";
    let body = r#"{"timeseries":{"result":[
        {"meta":{"symbol":["NOPE.NS"],"type":["annualTotalRevenue"]}},
        {"meta":{"symbol":["NOPE.NS"],"type":["annualNetIncome"]}}
    ],"error":null}}"#;
    let mock = mock_timeseries(&server, sym, body.to_string());

    let client = client_for(&server);
    let mut out = Vec::new();
    let outcome = report::run(&client, sym, &mut out).await.unwrap();
    mock.assert();

    assert_eq!(outcome, Outcome::NoData);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_DATA_MESSAGE}\n"));
}

#[tokio::test]
async fn offline_null_result_reports_no_data() {
    let server = httpmock::MockServer::start();
    let _auth = mock_cookie_crumb(&server);
    let mock = mock_timeseries(
        &server,
        SYM,
        r#"{"timeseries":{"result":null,"error":null}}"#.to_string(),
    );

    let client = client_for(&server);
    assert!(
        fundamentals::income_statement(&client, SYM, Frequency::Annual)
            .await
            .unwrap()
            .is_none()
    );

    let mut out = Vec::new();
    let outcome = report::run(&client, SYM, &mut out).await.unwrap();
    assert_eq!(mock.hits(), 2);
    assert_eq!(outcome, Outcome::NoData);
    assert_eq!(out, format!("{NO_DATA_MESSAGE}\n").into_bytes());
}
