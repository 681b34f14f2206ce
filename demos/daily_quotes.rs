//! Fetch a year of daily quotes for one issue and print the mid prices.
//!
//! Reads `J_QUANTS_MAIL_ADDRESS` and `J_QUANTS_PASSWORD` from the environment
//! or a `.env` file. Set `LOG_OUTPUT_PATH` to log to a file instead of stdout.
//!
//! Run with: cargo run --example daily_quotes

use jquants_rs::api::DailyQuotesQuery;
use jquants_rs::{logging, AppConfig, JQuantsClient};

#[tokio::main]
async fn main() -> jquants_rs::Result<()> {
    let app = AppConfig::from_env();
    let _guard = logging::init_logging(app.log_output_path.as_deref())?;

    let mut client = JQuantsClient::login(app.credentials(), app.client_config()).await?;

    let query = DailyQuotesQuery::default()
        .code("4478")
        .from("20220101")
        .to("20221230");
    let quotes = client.prices().daily_quotes(&query).await?;

    println!("Fetched {} daily quotes", quotes.len());
    for quote in &quotes {
        match quote.mid_price() {
            Some(mid) => println!("{} {}", quote.date, mid),
            None => println!("{} (no trades)", quote.date),
        }
    }

    Ok(())
}
