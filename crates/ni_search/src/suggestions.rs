use ni_core::{Config, SearchResult};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::source::SuggestionSource;

/// Observable state of the suggestion box.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub is_searching: bool,
    pub show_suggestions: bool,
}

/// Debounced search-as-you-type.
///
/// Each call to [`search`](Self::search) takes a new sequence number and
/// replaces the single pending lookup. A lookup publishes only while its
/// sequence number is still the latest one issued, so a superseded query can
/// never overwrite results for a newer one.
///
/// `search` spawns onto the current Tokio runtime and must be called from
/// inside one.
pub struct SearchSuggestions {
    source: Arc<dyn SuggestionSource>,
    debounce: Duration,
    min_query_chars: usize,
    latest: Arc<AtomicU64>,
    state: Arc<watch::Sender<SearchState>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchSuggestions {
    pub fn new(source: Arc<dyn SuggestionSource>, config: &Config) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            source,
            debounce: config.debounce(),
            min_query_chars: config.min_query_chars,
            latest: Arc::new(AtomicU64::new(0)),
            state: Arc::new(state),
            pending: Mutex::new(None),
        }
    }

    pub fn search(&self, query: &str) {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_pending();

        let query = query.to_string();
        if query.chars().count() < self.min_query_chars {
            self.state.send_modify(|state| {
                state.query = query;
                state.results.clear();
                state.is_searching = false;
                state.show_suggestions = false;
            });
            return;
        }

        self.state.send_modify(|state| {
            state.query = query.clone();
            state.is_searching = true;
        });

        let deadline = Instant::now() + self.debounce;
        let source = self.source.clone();
        let latest = self.latest.clone();
        let state = self.state.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if latest.load(Ordering::SeqCst) != seq {
                return;
            }

            let results = match source.lookup(&query).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("🔍 Suggestion lookup for '{}' failed: {}", query, e);
                    Vec::new()
                }
            };

            let published = state.send_if_modified(|state| {
                if latest.load(Ordering::SeqCst) != seq {
                    return false;
                }
                state.results = results;
                state.is_searching = false;
                state.show_suggestions = true;
                true
            });
            if published {
                debug!("🔍 Published suggestions for '{}' (seq {})", query, seq);
            } else {
                debug!("🔍 Dropped stale suggestions for '{}' (seq {})", query, seq);
            }
        });

        if let Some(stale) = self.pending_slot().replace(handle) {
            stale.abort();
        }
    }

    /// Back to idle, discarding any pending lookup.
    pub fn clear(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.cancel_pending();
        self.state.send_replace(SearchState::default());
    }

    /// Showing only takes effect once the query is long enough.
    pub fn set_show_suggestions(&self, show: bool) {
        let min = self.min_query_chars;
        self.state.send_if_modified(|state| {
            let next = show && state.query.chars().count() >= min;
            let changed = state.show_suggestions != next;
            state.show_suggestions = next;
            changed
        });
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    fn pending_slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending_slot().take() {
            handle.abort();
        }
    }
}

impl Drop for SearchSuggestions {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
