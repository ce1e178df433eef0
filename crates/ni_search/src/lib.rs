pub mod source;
pub mod suggestions;

pub use source::{matches, ArticleSuggestions, SuggestionSource};
pub use suggestions::{SearchState, SearchSuggestions};

pub mod prelude {
    pub use super::source::{ArticleSuggestions, SuggestionSource};
    pub use super::suggestions::{SearchState, SearchSuggestions};
    pub use ni_core::{Result, SearchResult};
}
