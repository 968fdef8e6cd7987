//! Translation provider trait
//!
//! This module defines the `TranslationProvider` trait for gateway
//! abstraction, so the translation service can run against the real remote
//! backend or a deterministic mock without coupling to either.

use crate::gateway::error::GatewayResult;
use async_trait::async_trait;

/// Generic trait for remote translation providers
///
/// Implementations handle the actual network work. The local resolver is
/// always available as a fallback, so providers are free to fail; failure is
/// recovered by the caller, not here.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate a single English text to Igbo
    ///
    /// # Arguments
    ///
    /// * `text` - The English text to translate
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The Igbo translation
    /// * `Err(GatewayError)` - If the provider is unreachable or rejects
    ///   the request. `GatewayError::Unauthorized` additionally signals
    ///   that the active session is no longer valid.
    async fn translate(&self, text: &str) -> GatewayResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}
