//! Application facade
//!
//! Wires the session store, translation service, suggester and the
//! per-user partitions into the control flow the UI drives: input →
//! translate (gateway preferred, resolver fallback) → display; successful
//! resolutions land in the active user's history; explicit user actions
//! mutate favorites. One facade instance per device/process; all mutation
//! is synchronous and last-write-wins, matching the persistence layer.

use crate::Dictionary;
use crate::gateway::{GatewayError, GatewayResult, RemoteGateway, TranslationProvider};
use crate::session::{SessionError, SessionStore, User, UserRole};
use crate::storage::{
    DEFAULT_HISTORY_CAP, FavoriteItem, FavoritesSet, HistoryItem, HistoryLedger, Storage,
    VideoItem, VideoLibrary,
};
use crate::translate::{Suggester, Translation, TranslationService};
use std::sync::Arc;
use tracing::warn;

pub struct TranslatorApp {
    store: Arc<dyn Storage>,
    sessions: SessionStore,
    service: TranslationService,
    suggester: Suggester,
    remote: Option<Arc<RemoteGateway>>,
    history_cap: usize,
}

impl TranslatorApp {
    /// Offline app over the given store and dictionary.
    pub fn new(store: Arc<dyn Storage>, dictionary: Dictionary) -> Self {
        let dictionary = Arc::new(dictionary);
        TranslatorApp {
            sessions: SessionStore::new(Arc::clone(&store)),
            service: TranslationService::local(Arc::clone(&dictionary)),
            suggester: Suggester::new(dictionary),
            store,
            remote: None,
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }

    /// App with an arbitrary translation provider (used by tests).
    pub fn with_provider(
        store: Arc<dyn Storage>,
        dictionary: Dictionary,
        provider: Arc<dyn TranslationProvider>,
    ) -> Self {
        let dictionary = Arc::new(dictionary);
        TranslatorApp {
            sessions: SessionStore::new(Arc::clone(&store)),
            service: TranslationService::with_gateway(Arc::clone(&dictionary), provider),
            suggester: Suggester::new(dictionary),
            store,
            remote: None,
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }

    /// App backed by the remote gateway for both translation and auth.
    pub fn with_remote(
        store: Arc<dyn Storage>,
        dictionary: Dictionary,
        gateway: Arc<RemoteGateway>,
    ) -> Self {
        let mut app = Self::with_provider(
            store,
            dictionary,
            Arc::clone(&gateway) as Arc<dyn TranslationProvider>,
        );
        app.remote = Some(gateway);
        app
    }

    /// Override the history retention cap.
    pub fn history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    // ========== Session ==========

    pub fn current_user(&self) -> Option<&User> {
        self.sessions.current_user()
    }

    /// Local (offline) login against the credential list.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, SessionError> {
        self.sessions.login(username, password, role)
    }

    /// Login against the remote backend's auth endpoint. Transport errors
    /// surface to the caller; the session stays Anonymous on any failure.
    pub async fn login_remote(&mut self, username: &str, password: &str) -> GatewayResult<User> {
        let gateway = self.remote.as_ref().ok_or_else(|| {
            GatewayError::ConfigError("No remote gateway configured".to_string())
        })?;
        let user = gateway.login(username, password).await?;
        self.sessions.complete_login(user.clone());
        Ok(user)
    }

    /// Log out, clearing the session record and any cached gateway token.
    /// Persisted history/favorites partitions are left in place.
    pub fn logout(&mut self) -> Option<User> {
        if let Some(gateway) = &self.remote {
            gateway.clear_token();
        }
        self.sessions.logout()
    }

    // ========== Translation ==========

    /// Translate input and, when a user is active and the resolution
    /// succeeded, record it in that user's history.
    ///
    /// A gateway 401 invalidates the session (forced logout) and the input
    /// is re-resolved locally so the caller still gets a displayable
    /// result.
    pub async fn translate(&mut self, input: &str) -> Translation {
        let translation = match self.service.translate(input).await {
            Ok(translation) => translation,
            Err(GatewayError::Unauthorized) => {
                warn!("Gateway session no longer valid, logging out");
                self.logout();
                self.service.resolve_locally(input)
            }
            Err(e) => {
                // The service recovers other failures itself; this arm is
                // only reachable if that changes
                warn!("Unexpected gateway error: {}", e);
                self.service.resolve_locally(input)
            }
        };

        if translation.found {
            if let Some(ledger) = self.ledger() {
                ledger.append(input, &translation.text);
            }
        }

        translation
    }

    pub fn suggest(&self, partial: &str) -> Vec<String> {
        self.suggester.suggest_default(partial)
    }

    // ========== History ==========

    pub fn history(&self) -> Vec<HistoryItem> {
        self.ledger().map(|l| l.list()).unwrap_or_default()
    }

    pub fn clear_history(&self) {
        if let Some(ledger) = self.ledger() {
            ledger.clear();
        }
    }

    // ========== Favorites ==========

    /// Star a pair for the active user. Anonymous sessions and invalid
    /// pairs are rejected as no-ops.
    pub fn add_favorite(&self, english: &str, igbo: &str) -> bool {
        match self.favorites_set() {
            Some(set) => set.add(english, igbo),
            None => false,
        }
    }

    pub fn remove_favorite(&self, id: i64) {
        if let Some(set) = self.favorites_set() {
            set.remove(id);
        }
    }

    pub fn favorites(&self) -> Vec<FavoriteItem> {
        self.favorites_set().map(|s| s.list()).unwrap_or_default()
    }

    // ========== Videos ==========

    pub fn add_video(&self, video: VideoItem) {
        VideoLibrary::new(Arc::clone(&self.store)).add(video);
    }

    pub fn remove_video(&self, id: i64) {
        VideoLibrary::new(Arc::clone(&self.store)).remove(id);
    }

    pub fn videos(&self) -> Vec<VideoItem> {
        VideoLibrary::new(Arc::clone(&self.store)).list()
    }

    // Anonymous sessions have no ledger or favorites partition.

    fn ledger(&self) -> Option<HistoryLedger> {
        self.sessions.current_user().map(|user| {
            HistoryLedger::with_cap(Arc::clone(&self.store), &user.id, self.history_cap)
        })
    }

    fn favorites_set(&self) -> Option<FavoritesSet> {
        self.sessions
            .current_user()
            .map(|user| FavoritesSet::new(Arc::clone(&self.store), &user.id))
    }
}
