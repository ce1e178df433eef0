use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Editorial sections an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Business,
    Society,
    Politics,
    Health,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Business,
        Category::Society,
        Category::Politics,
        Category::Health,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Society => "Society",
            Category::Politics => "Politics",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown category: {}", s)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub category: Category,
    pub is_archived: bool,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub engagement_score: f64,
    pub priority_score: f64,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_breaking: Option<bool>,
}

impl Article {
    pub fn breaking(&self) -> bool {
        self.is_breaking.unwrap_or(false)
    }

    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    /// Bumps one engagement counter by one.
    pub fn record(&mut self, kind: EngagementKind) {
        let counter = match kind {
            EngagementKind::View => &mut self.views,
            EngagementKind::Like => &mut self.likes,
            EngagementKind::Share => &mut self.shares,
            EngagementKind::Comment => &mut self.comments,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Reading activity that feeds the engagement counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementKind {
    View,
    Like,
    Share,
    Comment,
}

impl FromStr for EngagementKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" | "views" => Ok(EngagementKind::View),
            "like" | "likes" => Ok(EngagementKind::Like),
            "share" | "shares" => Ok(EngagementKind::Share),
            "comment" | "comments" => Ok(EngagementKind::Comment),
            _ => Err(Error::InvalidInput(format!("Unknown engagement kind: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Newest,
    Featured,
    Popular,
    Breaking,
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortBy::Newest),
            "featured" => Ok(SortBy::Featured),
            "popular" => Ok(SortBy::Popular),
            "breaking" => Ok(SortBy::Breaking),
            _ => Err(Error::InvalidInput(format!("Unknown sort key: {}", s))),
        }
    }
}

/// Accepted from callers but not applied by the query pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(TimeRange::Today),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "all" => Ok(TimeRange::All),
            _ => Err(Error::InvalidInput(format!("Unknown time range: {}", s))),
        }
    }
}

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// `all` or a category name, compared case-insensitively.
    pub category: String,
    /// `None` leaves the filtered order untouched.
    pub sort_by: Option<SortBy>,
    pub time_range: TimeRange,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            sort_by: Some(SortBy::Featured),
            time_range: TimeRange::All,
        }
    }
}

impl FilterOptions {
    /// Builds options from raw selector strings. Unknown values degrade
    /// instead of failing: an unknown sort key disables sorting and an
    /// unknown time range falls back to `all`.
    pub fn from_params(
        category: Option<&str>,
        sort_by: Option<&str>,
        time_range: Option<&str>,
    ) -> Self {
        Self::from_params_or(&Self::default(), category, sort_by, time_range)
    }

    /// Like [`FilterOptions::from_params`], filling missing or blank
    /// selectors from `defaults`.
    pub fn from_params_or(
        defaults: &FilterOptions,
        category: Option<&str>,
        sort_by: Option<&str>,
        time_range: Option<&str>,
    ) -> Self {
        Self {
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| defaults.category.clone()),
            sort_by: match sort_by {
                Some(key) => key.parse().ok(),
                None => defaults.sort_by,
            },
            time_range: time_range
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.time_range),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn is_all_categories(&self) -> bool {
        self.category.trim().eq_ignore_ascii_case(ALL_CATEGORIES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Article,
    Archive,
}

/// Suggestion-box projection of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub published_at: DateTime<Utc>,
    pub category: Category,
    pub slug: String,
}

impl From<&Article> for SearchResult {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            kind: if article.is_archived {
                ResultKind::Archive
            } else {
                ResultKind::Article
            },
            published_at: article.published_at,
            category: article.category,
            slug: article.slug.clone(),
        }
    }
}
