// server/src/main.rs

use anyhow::Result;
use health_records_server::cli::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    start_cli().await
}
