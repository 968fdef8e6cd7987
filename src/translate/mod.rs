/// Translation Module
///
/// The heart of the crate: the tiered resolver that approximates an Igbo
/// rendering from free-form English, the typeahead suggester over the same
/// dictionary, and the service that prefers the remote gateway but never
/// needs it.
///
/// # Example
///
/// ```ignore
/// use igbo_translator::{Dictionary, translate::TranslationService};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let service = TranslationService::local(Arc::new(Dictionary::seed()));
///     let translation = service.translate("give me water").await.unwrap();
///     assert_eq!(translation.text, "give me mmiri");
/// }
/// ```
pub mod resolver;
pub mod service;
pub mod suggester;

pub use resolver::{NOT_FOUND_MARKER, Resolution, Resolver};
pub use service::{Translation, TranslationService, TranslationSource};
pub use suggester::{DEFAULT_SUGGESTION_LIMIT, MIN_PARTIAL_CHARS, Suggester};
