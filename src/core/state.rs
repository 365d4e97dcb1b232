use crate::domain::model::{OrderOutcome, DEFAULT_QUANTITY};

/// Holds the current input quantity and the latest outcome, read by the
/// display layer. At most one of `rows`/`error` is populated after a
/// completed exchange; both stay `None` when the exchange itself failed.
#[derive(Debug, Clone)]
pub struct OrderState {
    pub quantity: i64,
    pub rows: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl Default for OrderState {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            rows: None,
            error: None,
        }
    }
}

impl OrderState {
    /// Stores the raw value. No bounds checking; the server validates.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Clears the previous outcome. Must run before every dispatch so a stale
    /// result is never visible alongside a new request.
    pub fn begin_calculation(&mut self) {
        self.rows = None;
        self.error = None;
    }

    pub fn apply_outcome(&mut self, outcome: OrderOutcome) {
        match outcome {
            OrderOutcome::Success { rows } => self.rows = rows,
            OrderOutcome::ValidationError { message } | OrderOutcome::ServerError { message } => {
                self.error = Some(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_state() {
        let state = OrderState::default();
        assert_eq!(state.quantity, 250);
        assert!(state.rows.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_set_quantity_accepts_any_value() {
        let mut state = OrderState::default();
        state.set_quantity(-7);
        assert_eq!(state.quantity, -7);
        state.set_quantity(0);
        assert_eq!(state.quantity, 0);
    }

    #[test]
    fn test_begin_calculation_clears_previous_outcome() {
        let mut state = OrderState::default();
        state.rows = Some(json!([{"quantity": 1, "pack": 250}]));
        state.error = Some("stale".to_string());

        state.begin_calculation();

        assert!(state.rows.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_apply_success_sets_rows_only() {
        let mut state = OrderState::default();
        state.apply_outcome(OrderOutcome::Success {
            rows: Some(json!([{"quantity": 2, "pack": 500}])),
        });

        assert_eq!(state.rows, Some(json!([{"quantity": 2, "pack": 500}])));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_apply_errors_set_message_only() {
        let mut state = OrderState::default();
        state.apply_outcome(OrderOutcome::ValidationError {
            message: "bad quantity".to_string(),
        });
        assert_eq!(state.error.as_deref(), Some("bad quantity"));
        assert!(state.rows.is_none());

        state.begin_calculation();
        state.apply_outcome(OrderOutcome::ServerError {
            message: "Internal Server Error".to_string(),
        });
        assert_eq!(state.error.as_deref(), Some("Internal Server Error"));
        assert!(state.rows.is_none());
    }
}
