pub mod calculators;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dof                     depth of field (POST, form-encoded)
/// /print-size              print size calculator (POST, form-encoded)
/// /equipment-investment    buy-or-rent calculator (POST, form-encoded)
/// /catalog                 preset tables (GET)
/// ```
///
/// Any other method on these paths answers 405 `{"error": "Method not allowed"}`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(calculators::router())
        .merge(catalog::router())
}
