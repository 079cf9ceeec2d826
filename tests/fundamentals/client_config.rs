use httpmock::Method::GET;
use httpmock::MockServer;
use std::time::Duration;
use url::Url;
use yfstatement::{Frequency, YfClient, YfClientBuilder, YfError, fundamentals};

use crate::common::{TIMESERIES_PATH, mock_cookie_crumb};

const EMPTY_RESULT: &str = r#"{"timeseries":{"result":[],"error":null}}"#;

fn builder_for(server: &MockServer) -> YfClientBuilder {
    YfClient::builder()
        .base_timeseries(Url::parse(&format!("{}{TIMESERIES_PATH}/", server.base_url())).unwrap())
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
}

#[tokio::test]
async fn custom_user_agent_reaches_the_server() {
    let server = MockServer::start();
    let _auth = mock_cookie_crumb(&server);

    let api = server.mock(|when, then| {
        when.method(GET)
            .path(format!("{TIMESERIES_PATH}/AAPL"))
            .header("user-agent", "yfstatement-test/1.0");
        then.status(200)
            .header("content-type", "application/json")
            .body(EMPTY_RESULT);
    });

    let client = builder_for(&server)
        .user_agent("yfstatement-test/1.0")
        .build()
        .unwrap();
    let table = fundamentals::income_statement(&client, "AAPL", Frequency::Annual)
        .await
        .unwrap();

    api.assert();
    assert!(table.is_some_and(|t| t.is_empty()));
}

#[tokio::test]
async fn request_timeout_surfaces_as_http_error() {
    let server = MockServer::start();
    let _auth = mock_cookie_crumb(&server);

    let slow = server.mock(|when, then| {
        when.method(GET).path(format!("{TIMESERIES_PATH}/SLOW"));
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_millis(800))
            .body(EMPTY_RESULT);
    });

    let client = builder_for(&server)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let err = fundamentals::income_statement(&client, "SLOW", Frequency::Annual)
        .await
        .unwrap_err();

    assert_eq!(slow.hits(), 1);
    match err {
        YfError::Http(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn connect_timeout_does_not_affect_reachable_server() {
    let server = MockServer::start();
    let _auth = mock_cookie_crumb(&server);

    let api = server.mock(|when, then| {
        when.method(GET).path(format!("{TIMESERIES_PATH}/MSFT"));
        then.status(200)
            .header("content-type", "application/json")
            .body(EMPTY_RESULT);
    });

    let client = builder_for(&server)
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    fundamentals::income_statement(&client, "MSFT", Frequency::Annual)
        .await
        .unwrap();

    api.assert();
}

#[tokio::test]
async fn connect_timeout_bounds_unreachable_host() {
    // TEST-NET-1 address: routed nowhere, so the connect attempt hangs.
    let client = YfClient::builder()
        .base_timeseries(Url::parse("http://192.0.2.1:81/ws/").unwrap())
        .cookie_url(Url::parse("http://192.0.2.1:81/consent").unwrap())
        .crumb_url(Url::parse("http://192.0.2.1:81/getcrumb").unwrap())
        .connect_timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let res = fundamentals::income_statement(&client, "AAPL", Frequency::Annual).await;

    assert!(matches!(res, Err(YfError::Http(_))), "got {res:?}");
}
