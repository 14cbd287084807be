//! Expense CRUD endpoints.

use api_types::expense::{ExpenseCreated, ExpenseNew, ExpenseUpdate, ExpenseView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{ServerError, server::ServerState};

pub(crate) fn map_category(category: api_types::Category) -> engine::Category {
    match category {
        api_types::Category::Food => engine::Category::Food,
        api_types::Category::Transport => engine::Category::Transport,
        api_types::Category::Entertainment => engine::Category::Entertainment,
        api_types::Category::Shopping => engine::Category::Shopping,
        api_types::Category::Bills => engine::Category::Bills,
    }
}

pub(crate) fn map_category_view(category: engine::Category) -> api_types::Category {
    match category {
        engine::Category::Food => api_types::Category::Food,
        engine::Category::Transport => api_types::Category::Transport,
        engine::Category::Entertainment => api_types::Category::Entertainment,
        engine::Category::Shopping => api_types::Category::Shopping,
        engine::Category::Bills => api_types::Category::Bills,
    }
}

pub(crate) fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        amount: expense.amount.to_f64(),
        category: map_category_view(expense.category),
        date: expense.date,
        description: expense.description,
        tags: expense.tags,
        receipt_note: expense.receipt_note,
        recurring: expense.recurring,
    }
}

/// Handle requests for recording a new expense.
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<ExpenseNew>, ServerError>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let draft = engine::ExpenseDraft {
        amount: engine::Money::try_from_f64(payload.amount)?,
        category: map_category(payload.category),
        date: payload.date,
        description: payload.description,
        tags: payload.tags,
        receipt_note: payload.receipt_note,
        recurring: payload.recurring,
    };

    let (expense, warning) = state.engine.write().await.add_expense(draft)?;
    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            expense: map_expense(expense),
            warning,
        }),
    ))
}

/// Handle requests for listing expenses (canonical records plus this
/// month's recurring instances).
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ExpenseView>> {
    let engine = state.engine.read().await;
    Json(engine.visible_expenses().into_iter().map(map_expense).collect())
}

/// Handle requests for partially updating an expense.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    WithRejection(Json(payload), _): WithRejection<Json<ExpenseUpdate>, ServerError>,
) -> Result<Json<ExpenseView>, ServerError> {
    let amount = payload.amount.map(engine::Money::try_from_f64).transpose()?;
    let patch = engine::ExpensePatch {
        amount,
        category: payload.category.map(map_category),
        date: payload.date,
        description: payload.description,
        tags: payload.tags,
        receipt_note: payload.receipt_note,
        recurring: payload.recurring,
    };

    let expense = state.engine.write().await.update_expense(id, patch)?;
    Ok(Json(map_expense(expense)))
}

/// Handle requests for deleting an expense.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ServerError> {
    state.engine.write().await.delete_expense(id)?;
    Ok(StatusCode::NO_CONTENT)
}
