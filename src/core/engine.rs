use crate::core::classifier::classify;
use crate::core::state::OrderState;
use crate::domain::ports::OrderGateway;
use crate::utils::error::{QuoteError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Drives one calculation: clear the state, dispatch, classify, write back.
///
/// At most one calculation may be in flight at a time. The engine holds a
/// busy flag around the dispatch path and rejects overlapping calls with
/// [`QuoteError::Busy`].
pub struct QuoteEngine<G: OrderGateway> {
    gateway: G,
    in_flight: AtomicBool,
}

impl<G: OrderGateway> QuoteEngine<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs a full calculation for `state.quantity`. Classified validation and
    /// server errors land in `state.error`; transport and parse faults return
    /// as `Err` with the state left cleared.
    pub async fn calculate(&self, state: &mut OrderState) -> Result<()> {
        if self.in_flight.swap(true, Ordering::Acquire) {
            return Err(QuoteError::Busy);
        }

        let result = self.run(state).await;
        self.in_flight.store(false, Ordering::Release);

        result
    }

    async fn run(&self, state: &mut OrderState) -> Result<()> {
        state.begin_calculation();

        tracing::info!("requesting quote for quantity {}", state.quantity);
        let raw = self.gateway.submit(state.quantity).await?;

        let outcome = classify(&raw)?;
        state.apply_outcome(outcome);

        Ok(())
    }
}
