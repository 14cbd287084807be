//! CSV export endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{ServerError, server::ServerState};

/// Handle requests for exporting canonical records as a CSV attachment.
///
/// Recurring virtual instances are excluded. Tags are joined with commas
/// inside a single quoted column, so a comma inside a tag cannot be told
/// apart from a tag separator on re-import.
pub async fn csv(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let engine = state.engine.read().await;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "id",
            "amount",
            "category",
            "date",
            "description",
            "tags",
            "receipt_note",
            "recurring",
        ])
        .map_err(internal)?;

    for expense in engine.expenses() {
        writer
            .write_record([
                expense.id.to_string(),
                expense.amount.to_f64().to_string(),
                expense.category.to_string(),
                expense.date.to_string(),
                expense.description.clone(),
                expense.tags.join(","),
                expense.receipt_note.clone(),
                expense.recurring.to_string(),
            ])
            .map_err(internal)?;
    }

    let data = writer
        .into_inner()
        .map_err(|err| internal(err.into_error()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        data,
    )
        .into_response())
}

fn internal(err: impl std::fmt::Display) -> ServerError {
    ServerError::Internal(err.to_string())
}
