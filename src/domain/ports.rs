use crate::domain::model::RawResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}

/// Submits one order calculation and returns the raw transport result.
/// Implementations must not interpret the response; classification happens
/// separately.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, quantity: i64) -> Result<RawResponse>;
}
