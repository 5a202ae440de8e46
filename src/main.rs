//! Currency Rates Scraper — Binary Entrypoint
//! Loads environment configuration, initializes tracing and performs one
//! full scrape run, printing the handler response as JSON.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("currency_rates_scraper=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op when the variables come from the runtime.
    let _ = dotenvy::dotenv();
    init_tracing();

    let response = currency_rates_scraper::handler(serde_json::json!({})).await;

    println!(
        "{}",
        serde_json::to_string(&response).unwrap_or_else(|_| response.body.clone())
    );

    if response.status_code != 200 {
        std::process::exit(1);
    }
}
