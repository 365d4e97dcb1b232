pub mod file;

use crate::domain::model::DEFAULT_QUANTITY;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-quote")]
#[command(about = "Requests an order pack breakdown from the pricing service")]
pub struct CliConfig {
    /// Base URL of the pricing service
    #[arg(long, default_value = "http://localhost:3000")]
    pub api_endpoint: String,

    /// Order quantity to price; sent as-is, the server validates it
    #[arg(long, default_value_t = DEFAULT_QUANTITY)]
    pub quantity: i64,

    /// Optional TOML file; its values override the flags
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Folds an optional config file into the parsed flags.
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = &self.config {
            let file = file::FileConfig::from_file(path)?;
            self.api_endpoint = file.endpoint;
            if let Some(quantity) = file.quantity {
                self.quantity = quantity;
            }
        }

        Ok(self)
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}
