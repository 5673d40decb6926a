use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::NaiveDate;
use ns_core::{SearchQuery, SearchResults};
use ns_storage::PageView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsParams {
    pub q: String,
    pub news_date: NaiveDate,
}

impl From<NewsParams> for SearchQuery {
    fn from(params: NewsParams) -> Self {
        SearchQuery::new(params.q, params.news_date)
    }
}

/// Provider-shaped payload with a sentiment label on every article.
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub results: SearchResults,
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    params: Result<Query<NewsParams>, QueryRejection>,
) -> Result<Json<NewsResponse>, ApiError> {
    let Query(params) = params?;
    let results = state.news.search(&params.into()).await?;
    Ok(Json(NewsResponse { status: "ok", results }))
}

pub async fn search_session(
    State(state): State<Arc<AppState>>,
    params: Result<Json<NewsParams>, JsonRejection>,
) -> Result<Json<PageView>, ApiError> {
    let Json(params) = params?;
    let view = state.news.search_into(&params.into(), &state.session).await?;
    Ok(Json(view))
}

pub async fn current_page(State(state): State<Arc<AppState>>) -> Json<PageView> {
    Json(state.session.view().await)
}

pub async fn next_page(State(state): State<Arc<AppState>>) -> Json<PageView> {
    Json(state.session.next().await)
}

pub async fn previous_page(State(state): State<Arc<AppState>>) -> Json<PageView> {
    Json(state.session.previous().await)
}
