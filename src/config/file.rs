use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML file configuration:
///
/// ```toml
/// endpoint = "http://localhost:3000"
/// quantity = 250
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub endpoint: String,
    pub quantity: Option<i64>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuoteError;
    use std::io::Write;

    #[test]
    fn test_from_str_full() {
        let config = FileConfig::from_str(
            r#"
endpoint = "http://localhost:3000"
quantity = 500
"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:3000");
        assert_eq!(config.quantity, Some(500));
    }

    #[test]
    fn test_from_str_quantity_optional() {
        let config = FileConfig::from_str(r#"endpoint = "https://pricing.internal""#).unwrap();
        assert!(config.quantity.is_none());
    }

    #[test]
    fn test_from_str_missing_endpoint() {
        let err = FileConfig::from_str("quantity = 10").unwrap_err();
        assert!(matches!(err, QuoteError::Toml(_)));
    }

    #[test]
    fn test_from_str_rejects_invalid_endpoint() {
        let err = FileConfig::from_str(r#"endpoint = "not a url""#).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"endpoint = "http://localhost:3000""#).unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:3000");
    }

    #[test]
    fn test_from_file_missing() {
        let err = FileConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
