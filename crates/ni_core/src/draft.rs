use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{Article, Category};
use crate::{Error, Result};

const FEATURED_PRIORITY: f64 = 9.0;
const DEFAULT_PRIORITY: f64 = 5.0;

/// Lowercases `title` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing runs are kept.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_run = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug
}

/// Splits a comma-separated tag field, trimming each entry.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Admin authoring input for a new article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: Option<Category>,
    /// Comma-separated, e.g. `tag1, tag2, tag3`.
    pub tags: String,
    pub featured_image: String,
    pub is_featured: bool,
    pub is_breaking: bool,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    /// Turns the draft into a fresh article stamped at `now`, with zeroed
    /// counters and a priority derived from the featured flag.
    pub fn into_article(self, now: DateTime<Utc>) -> Result<Article> {
        let featured_image = match self.featured_image.trim() {
            "" => None,
            raw => {
                Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
                Some(raw.to_string())
            }
        };

        Ok(Article {
            id: uuid::Uuid::new_v4().to_string(),
            slug: slugify(&self.title),
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            published_at: now,
            created_at: now,
            updated_at: now,
            tags: split_tags(&self.tags),
            category: self.category.unwrap_or(Category::Technology),
            is_archived: false,
            views: 0,
            likes: 0,
            shares: 0,
            comments: 0,
            engagement_score: 0.0,
            priority_score: if self.is_featured {
                FEATURED_PRIORITY
            } else {
                DEFAULT_PRIORITY
            },
            featured_image,
            is_featured: Some(self.is_featured),
            is_breaking: Some(self.is_breaking),
        })
    }
}
