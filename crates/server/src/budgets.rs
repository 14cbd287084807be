//! Budget API endpoints.

use std::collections::HashMap;

use api_types::budget::{BudgetSet, BudgetView};
use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    ServerError,
    expenses::{map_category, map_category_view},
    server::ServerState,
};

/// Handle requests for listing configured budget limits.
pub async fn list(State(state): State<ServerState>) -> Json<HashMap<api_types::Category, f64>> {
    let engine = state.engine.read().await;
    Json(
        engine
            .budgets()
            .iter()
            .map(|(category, limit)| (map_category_view(*category), limit.to_f64()))
            .collect(),
    )
}

/// Handle requests for setting a category budget limit.
pub async fn set(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<BudgetSet>, ServerError>,
) -> Result<Json<BudgetView>, ServerError> {
    let limit = engine::Money::try_from_f64(payload.limit)?;
    let (category, limit) = state
        .engine
        .write()
        .await
        .set_budget(map_category(payload.category), limit)?;

    Ok(Json(BudgetView {
        category: map_category_view(category),
        limit: limit.to_f64(),
    }))
}
