pub mod classifier;
pub mod dispatcher;
pub mod engine;
pub mod state;

pub use crate::domain::model::{CreateOrderRequest, OrderOutcome, RawResponse};
pub use crate::domain::ports::{ConfigProvider, OrderGateway};
pub use crate::utils::error::Result;
