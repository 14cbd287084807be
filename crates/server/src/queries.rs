//! Filter and search endpoints.

use api_types::expense::ExpenseView;
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{ServerError, expenses::map_expense, server::ServerState};

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct TagParams {
    #[serde(default)]
    pub tag: String,
}

fn parse_date(value: &str) -> Result<NaiveDate, ServerError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ServerError::Generic(format!("invalid date: {value}")))
}

/// Handle requests for filtering expenses by inclusive date range.
pub async fn filter(
    State(state): State<ServerState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let start = params.start.as_deref().map(parse_date).transpose()?;
    let end = params.end.as_deref().map(parse_date).transpose()?;

    let engine = state.engine.read().await;
    Ok(Json(
        engine
            .filter_by_date(start, end)
            .into_iter()
            .map(map_expense)
            .collect(),
    ))
}

/// Handle requests for searching expense descriptions.
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<ExpenseView>> {
    let engine = state.engine.read().await;
    Json(
        engine
            .search_description(&params.keyword)
            .into_iter()
            .map(map_expense)
            .collect(),
    )
}

/// Handle requests for filtering expenses by tag.
pub async fn tags(
    State(state): State<ServerState>,
    Query(params): Query<TagParams>,
) -> Json<Vec<ExpenseView>> {
    let engine = state.engine.read().await;
    Json(
        engine
            .filter_by_tag(&params.tag)
            .into_iter()
            .map(map_expense)
            .collect(),
    )
}
