pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{file::FileConfig, CliConfig};
pub use crate::core::{
    classifier::classify, dispatcher::HttpOrderGateway, engine::QuoteEngine, state::OrderState,
};
pub use crate::domain::model::{CreateOrderRequest, OrderOutcome, RawResponse};
pub use crate::utils::error::{QuoteError, Result};
