use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use ni_core::display::{time_ago, EngagementTier};
use ni_core::{
    find_by_slug, group_sections, query, related_articles, Article, ArticleDraft, EngagementKind,
    Error, FeedSections, FilterOptions, SearchResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedParams {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub time_range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub articles: Vec<Article>,
    #[serde(flatten)]
    pub sections: FeedSections,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub article: Article,
    pub published: String,
    pub engagement: EngagementTier,
    pub related: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct EngagementRequest {
    pub kind: EngagementKind,
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> ApiResult<Json<FeedResponse>> {
    let options = FilterOptions::from_params_or(
        &state.config.default_filters,
        params.category.as_deref(),
        params.sort_by.as_deref(),
        params.time_range.as_deref(),
    );
    let articles = state.feed.load(&options).await?;
    let sections = group_sections(&articles);
    Ok(Json(FeedResponse { articles, sections }))
}

/// Serving the detail page counts as a view.
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleResponse>> {
    let articles = state.store.articles().await?;
    let id = find_by_slug(&articles, &slug)
        .map(|a| a.id.clone())
        .ok_or_else(|| Error::NotFound(slug.clone()))?;
    let article = state.store.record_engagement(&id, EngagementKind::View).await?;

    let ordering = FilterOptions {
        category: ni_core::types::ALL_CATEGORIES.to_string(),
        ..state.config.default_filters.clone()
    };
    let ordered = query(&articles, &ordering);
    let related = related_articles(&ordered, &article, state.config.related_limit)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ArticleResponse {
        published: time_ago(article.published_at, Utc::now()),
        engagement: EngagementTier::from_score(article.engagement_score),
        article,
        related,
    }))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<SearchResult>>> {
    if params.q.chars().count() < state.config.min_query_chars {
        return Ok(Json(Vec::new()));
    }
    Ok(Json(state.suggestions.lookup(&params.q).await?))
}

pub async fn record_engagement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<EngagementRequest>,
) -> ApiResult<Json<Article>> {
    Ok(Json(state.store.record_engagement(&id, request.kind).await?))
}

pub async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ArticleDraft>,
) -> ApiResult<impl IntoResponse> {
    let article = state.store.create_article(draft).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn toggle_archive(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Article>> {
    Ok(Json(state.store.toggle_archive(&id).await?))
}

pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_article(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
