//! Categories API endpoint.

use axum::Json;

/// Handle requests for the fixed category list.
pub async fn list() -> Json<Vec<api_types::Category>> {
    Json(api_types::Category::ALL.to_vec())
}
