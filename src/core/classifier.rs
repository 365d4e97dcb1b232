use crate::domain::model::{OrderOutcome, RawResponse, DEFAULT_VALIDATION_MESSAGE};
use crate::utils::error::{QuoteError, Result};

/// Maps a raw transport result to exactly one outcome tier, checked in order:
/// status >= 500 is a server error whose body is never parsed; 400..=499 is a
/// validation error with the body's `error` message when it carries one;
/// everything below 400 is a success carrying `data.rows` as-is.
pub fn classify(resp: &RawResponse) -> Result<OrderOutcome> {
    if resp.status >= 500 {
        return Ok(OrderOutcome::ServerError {
            message: resp.status_text.clone(),
        });
    }

    let body: serde_json::Value =
        serde_json::from_str(&resp.body).map_err(|source| QuoteError::MalformedBody {
            status: resp.status,
            source,
        })?;

    if resp.status >= 400 {
        let message = match body.get("error").and_then(|v| v.as_str()) {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => DEFAULT_VALIDATION_MESSAGE.to_string(),
        };

        return Ok(OrderOutcome::ValidationError { message });
    }

    // No shape check on the rows: the server owns the schema.
    Ok(OrderOutcome::Success {
        rows: body.pointer("/data/rows").cloned(),
    })
}
