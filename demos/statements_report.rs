//! Fetch the financial statements of one issue and print a text report.
//!
//! Run with: cargo run --example statements_report -- 86970

use jquants_rs::api::StatementsQuery;
use jquants_rs::report::statements_report;
use jquants_rs::{logging, AppConfig, JQuantsClient};

#[tokio::main]
async fn main() -> jquants_rs::Result<()> {
    let app = AppConfig::from_env();
    let _guard = logging::init_logging(app.log_output_path.as_deref())?;

    let code = std::env::args().nth(1).unwrap_or_else(|| "86970".to_string());

    let mut client = JQuantsClient::login(app.credentials(), app.client_config()).await?;
    let statements = client
        .statements()
        .list(&StatementsQuery::default().code(code))
        .await?;

    println!("{}", statements_report(&statements));
    Ok(())
}
