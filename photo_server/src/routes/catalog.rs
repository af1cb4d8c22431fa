use axum::extract::State;
use axum::{routing::get, Json, Router};

use photo_core::Catalog;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/v1/catalog -- every preset table the front-ends populate pickers from.
async fn get_catalog(State(state): State<AppState>) -> Json<&'static Catalog> {
    Json(state.catalog)
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/catalog",
        get(get_catalog).fallback(|| async { AppError::MethodNotAllowed }),
    )
}
