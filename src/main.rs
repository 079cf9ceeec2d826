//! Fetch and print the annual income statement for Tata Steel (NSE).
//!
//! Run: `cargo run --bin balance_sheet_tatasteel`
//! Logs go to stderr; set `RUST_LOG=debug` to see the requests.

use tracing_subscriber::EnvFilter;
use yfstatement::{SYMBOL, YfClient, YfError, report};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), YfError> {
    init_tracing();

    let client = YfClient::builder().build()?;
    let mut out = std::io::stdout().lock();
    report::run(&client, SYMBOL, &mut out).await?;

    Ok(())
}
