use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    /// The request never produced an HTTP status: connection refused, DNS
    /// failure, broken stream. Deliberately not folded into an outcome tier.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx/4xx response whose body is not valid JSON.
    #[error("response body is not valid JSON (status {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A second calculation was attempted while one is still in flight.
    #[error("a calculation is already in flight")]
    Busy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
