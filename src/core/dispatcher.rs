use crate::domain::model::{CreateOrderRequest, RawResponse};
use crate::domain::ports::{ConfigProvider, OrderGateway};
use crate::utils::error::Result;
use reqwest::Client;

/// Talks to the pricing service over HTTP. One POST per `submit` call, no
/// timeout, no retry; a request that never returns keeps the calculation
/// pending.
pub struct HttpOrderGateway<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpOrderGateway<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.config.api_endpoint().trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> OrderGateway for HttpOrderGateway<C> {
    async fn submit(&self, quantity: i64) -> Result<RawResponse> {
        let url = self.orders_url();
        tracing::debug!("POST {} quantity={}", url, quantity);

        let response = self
            .client
            .post(&url)
            .json(&CreateOrderRequest { quantity })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("order response status: {}", status);

        let body = response.text().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
