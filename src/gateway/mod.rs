/// Remote Gateway Module
///
/// This module wraps the optional translator backend. The backend, when
/// reachable, supersedes the local resolver's result, but every failure path
/// falls back to local resolution; the network is never required.
///
/// # Overview
///
/// 1. **TranslationProvider trait** - seam between the translation service
///    and whatever backend is in use
/// 2. **RemoteGateway** - HTTP client for `/api/translate` and the auth
///    sibling endpoints (`/api/login`, `/api/register`, `/api/getUser`)
/// 3. **MockProvider** - deterministic, network-free provider for tests
///
/// HTTP 401 is special-cased: it is a session-invalidation signal, not a
/// translation failure, and is surfaced to the caller as
/// `GatewayError::Unauthorized` instead of being swallowed by the fallback.
pub mod error;
pub mod mock;
pub mod provider;
pub mod remote;

pub use error::{GatewayError, GatewayResult};
pub use mock::{MockMode, MockProvider};
pub use provider::TranslationProvider;
pub use remote::{BACKEND_URL_ENV, RemoteGateway};
