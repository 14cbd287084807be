//! Statistics API endpoints.

use std::collections::HashMap;

use api_types::stats::Total;
use axum::{Json, extract::State};

use crate::{expenses::map_category_view, server::ServerState};

/// Handle requests for the current-month total.
pub async fn total(State(state): State<ServerState>) -> Json<Total> {
    let engine = state.engine.read().await;
    Json(Total {
        total: engine.monthly_total().to_f64(),
    })
}

/// Handle requests for the per-category current-month breakdown.
pub async fn breakdown(
    State(state): State<ServerState>,
) -> Json<HashMap<api_types::Category, f64>> {
    let engine = state.engine.read().await;
    Json(
        engine
            .category_breakdown()
            .into_iter()
            .map(|(category, spent)| (map_category_view(category), spent.to_f64()))
            .collect(),
    )
}
