use anyhow::Context;
use clap::Parser;
use order_quote::utils::{logger, validation::Validate};
use order_quote::{CliConfig, HttpOrderGateway, OrderState, QuoteEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-quote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let config = config
        .resolve()
        .context("failed to load configuration file")?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let mut state = OrderState::default();
    state.set_quantity(config.quantity);

    let gateway = HttpOrderGateway::new(config);
    let engine = QuoteEngine::new(gateway);

    if let Err(e) = engine.calculate(&mut state).await {
        tracing::error!("❌ Calculation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(3);
    }

    if let Some(error) = &state.error {
        eprintln!("❌ {}", error);
        std::process::exit(1);
    }

    match &state.rows {
        Some(rows) => {
            tracing::info!("✅ Quote received for quantity {}", state.quantity);
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        None => println!("(no rows returned)"),
    }

    Ok(())
}
