//! Mock translation provider for testing
//!
//! A deterministic, network-free provider for exercising the translation
//! service without a running backend.
//!
//! # Example
//!
//! ```ignore
//! use igbo_translator::gateway::{MockMode, MockProvider, TranslationProvider};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockProvider::new(MockMode::Echo);
//!     let result = mock.translate("ndewo").await.unwrap();
//!     assert_eq!(result, "ndewo");
//! }
//! ```

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::provider::TranslationProvider;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock behaviors for the different gateway scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Use predefined english→igbo mappings; unknown input is an error,
    /// which exercises the local-resolver fallback
    Mappings(HashMap<String, String>),

    /// Return the input unchanged
    Echo,

    /// Simulate a backend failure with the given message
    Error(String),

    /// Simulate an HTTP 401, which must invalidate the session
    Unauthorized,
}

/// Network-free provider that simulates the remote backend
#[derive(Debug, Clone)]
pub struct MockProvider {
    mode: MockMode,
}

impl MockProvider {
    pub fn new(mode: MockMode) -> Self {
        Self { mode }
    }

    /// Convenience constructor for the mappings mode
    pub fn with_mappings(pairs: &[(&str, &str)]) -> Self {
        let map = pairs
            .iter()
            .map(|(english, igbo)| (english.to_string(), igbo.to_string()))
            .collect();
        Self::new(MockMode::Mappings(map))
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(&self, text: &str) -> GatewayResult<String> {
        match &self.mode {
            MockMode::Mappings(map) => map.get(text).cloned().ok_or_else(|| {
                GatewayError::ProviderError(format!("No mock mapping for '{}'", text))
            }),
            MockMode::Echo => Ok(text.to_string()),
            MockMode::Error(msg) => Err(GatewayError::NetworkError(msg.clone())),
            MockMode::Unauthorized => Err(GatewayError::Unauthorized),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Provider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mappings_mode() {
        let mock = MockProvider::with_mappings(&[("hello", "ndewo")]);
        assert_eq!(mock.translate("hello").await.unwrap(), "ndewo");
    }

    #[tokio::test]
    async fn test_mappings_unknown_input_is_error() {
        let mock = MockProvider::with_mappings(&[("hello", "ndewo")]);
        let result = mock.translate("unknown").await;
        assert!(matches!(result, Err(GatewayError::ProviderError(_))));
    }

    #[tokio::test]
    async fn test_echo_mode() {
        let mock = MockProvider::new(MockMode::Echo);
        assert_eq!(mock.translate("kedu").await.unwrap(), "kedu");
    }

    #[tokio::test]
    async fn test_error_mode() {
        let mock = MockProvider::new(MockMode::Error("backend down".to_string()));
        match mock.translate("hello").await {
            Err(GatewayError::NetworkError(msg)) => assert_eq!(msg, "backend down"),
            other => panic!("Expected NetworkError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_mode() {
        let mock = MockProvider::new(MockMode::Unauthorized);
        assert_eq!(
            mock.translate("hello").await,
            Err(GatewayError::Unauthorized)
        );
    }

    #[test]
    fn test_provider_name() {
        let mock = MockProvider::new(MockMode::Echo);
        assert_eq!(mock.provider_name(), "Mock Provider");
    }
}
