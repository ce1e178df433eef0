pub mod config;
pub mod display;
pub mod draft;
pub mod error;
pub mod feed;
pub mod logging;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use config::Config;
pub use draft::{slugify, ArticleDraft};
pub use error::{Error, Result};
pub use feed::ArticleFeed;
pub use pipeline::{find_by_slug, group_sections, query, related_articles, FeedSections};
pub use storage::{ArticleSink, ArticleSource, ArticleStore};
pub use types::{
    Article, Category, EngagementKind, FilterOptions, ResultKind, SearchResult, SortBy, TimeRange,
};

pub mod prelude {
    pub use crate::storage::{ArticleSink, ArticleSource, ArticleStore};
    pub use crate::types::*;
    pub use crate::{Error, Result};
}
