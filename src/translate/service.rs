//! Translation orchestration
//!
//! Prefers the remote gateway when one is configured; the local resolver is
//! always the fallback, so translation works fully offline. Gateway
//! failures are logged and recovered here — except HTTP 401, which is a
//! session-invalidation signal the caller must see.

use crate::Dictionary;
use crate::gateway::{GatewayError, TranslationProvider};
use crate::translate::resolver::Resolver;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which side produced the displayed translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSource {
    Remote,
    Local,
}

/// A resolved translation plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub found: bool,
    pub source: TranslationSource,
}

/// Gateway-preferred, resolver-fallback translation front end.
pub struct TranslationService {
    resolver: Resolver,
    gateway: Option<Arc<dyn TranslationProvider>>,
}

impl TranslationService {
    /// Fully offline service; every input goes to the resolver.
    pub fn local(dictionary: Arc<Dictionary>) -> Self {
        TranslationService {
            resolver: Resolver::new(dictionary),
            gateway: None,
        }
    }

    /// Service that tries `gateway` first and falls back locally.
    pub fn with_gateway(dictionary: Arc<Dictionary>, gateway: Arc<dyn TranslationProvider>) -> Self {
        TranslationService {
            resolver: Resolver::new(dictionary),
            gateway: Some(gateway),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Translate `input`, remote result winning over local.
    ///
    /// Empty input never reaches the gateway. Any gateway failure other
    /// than 401 is recovered by the resolver. A 401 comes back as
    /// `Err(GatewayError::Unauthorized)` so the caller can log the session
    /// out; local resolution is still available to it afterwards.
    pub async fn translate(&self, input: &str) -> Result<Translation, GatewayError> {
        if input.trim().is_empty() {
            return Ok(Translation {
                text: String::new(),
                found: false,
                source: TranslationSource::Local,
            });
        }

        if let Some(gateway) = &self.gateway {
            match gateway.translate(input).await {
                Ok(text) => {
                    debug!(provider = gateway.provider_name(), "remote translation used");
                    return Ok(Translation {
                        text,
                        found: true,
                        source: TranslationSource::Remote,
                    });
                }
                Err(GatewayError::Unauthorized) => {
                    return Err(GatewayError::Unauthorized);
                }
                Err(e) => {
                    warn!(
                        provider = gateway.provider_name(),
                        "falling back to local resolver: {}", e
                    );
                }
            }
        }

        Ok(self.resolve_locally(input))
    }

    /// Run just the local tiers, bypassing any gateway.
    pub fn resolve_locally(&self, input: &str) -> Translation {
        let resolution = self.resolver.resolve(input);
        Translation {
            text: resolution.text,
            found: resolution.found,
            source: TranslationSource::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{MockMode, MockProvider};

    fn seed() -> Arc<Dictionary> {
        Arc::new(Dictionary::seed())
    }

    #[tokio::test]
    async fn test_local_only_service_resolves() {
        let service = TranslationService::local(seed());
        let translation = service.translate("hello").await.unwrap();
        assert_eq!(translation.text, "ndewo");
        assert!(translation.found);
        assert_eq!(translation.source, TranslationSource::Local);
    }

    #[tokio::test]
    async fn test_gateway_result_supersedes_resolver() {
        let mock = MockProvider::with_mappings(&[("hello", "ndewo (remote)")]);
        let service = TranslationService::with_gateway(seed(), Arc::new(mock));

        let translation = service.translate("hello").await.unwrap();
        assert_eq!(translation.text, "ndewo (remote)");
        assert_eq!(translation.source, TranslationSource::Remote);
    }

    #[tokio::test]
    async fn test_gateway_failure_falls_back_locally() {
        let mock = MockProvider::new(MockMode::Error("backend down".to_string()));
        let service = TranslationService::with_gateway(seed(), Arc::new(mock));

        let translation = service.translate("hello").await.unwrap();
        assert_eq!(translation.text, "ndewo");
        assert_eq!(translation.source, TranslationSource::Local);
    }

    #[tokio::test]
    async fn test_unauthorized_is_surfaced_not_swallowed() {
        let mock = MockProvider::new(MockMode::Unauthorized);
        let service = TranslationService::with_gateway(seed(), Arc::new(mock));

        let result = service.translate("hello").await;
        assert_eq!(result, Err(GatewayError::Unauthorized));

        // Local resolution still works for the caller afterwards
        let translation = service.resolve_locally("hello");
        assert_eq!(translation.text, "ndewo");
    }

    #[tokio::test]
    async fn test_empty_input_never_reaches_gateway() {
        // Unauthorized mock would error if called; empty input must not
        let mock = MockProvider::new(MockMode::Unauthorized);
        let service = TranslationService::with_gateway(seed(), Arc::new(mock));

        let translation = service.translate("   ").await.unwrap();
        assert_eq!(translation.text, "");
        assert!(!translation.found);
    }

    #[tokio::test]
    async fn test_not_found_passthrough_keeps_local_source() {
        let service = TranslationService::local(seed());
        let translation = service.translate("xyz qrs").await.unwrap();
        assert!(!translation.found);
        assert!(translation.text.starts_with("xyz qrs"));
    }
}
