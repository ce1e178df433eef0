use ni_core::{ArticleFeed, ArticleStore, Config};
use ni_search::{ArticleSuggestions, SuggestionSource};
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub feed: ArticleFeed,
    pub suggestions: Arc<dyn SuggestionSource>,
    pub config: Config,
}

impl AppState {
    /// Wires the feed and suggestion lookups over one shared store.
    pub fn new<S: ArticleStore + 'static>(store: Arc<S>, config: Config) -> Self {
        let feed = ArticleFeed::new(store.clone()).with_latency(config.simulated_latency());
        let suggestions = Arc::new(ArticleSuggestions::new(store.clone()));
        Self {
            store,
            feed,
            suggestions,
            config,
        }
    }
}
