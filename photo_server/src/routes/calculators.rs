//! Form-encoded calculator endpoints.
//!
//! Each endpoint reads the posted form, dispatches on its `action` field and
//! answers with the `{success, data}` / `{error}` envelope. Field validation
//! failures are reported with status 200 so the calculator pages can show
//! the message inline.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::routing::{post, MethodRouter};
use axum::{Form, Json, Router};

use photo_core::{ApiResponse, Calculator, FormFields};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Run a calculator against posted form fields.
///
/// An unreadable body is treated as an empty form, which has no `action`.
fn run_calculator(
    calculator: Calculator,
    state: &AppState,
    form: Result<Form<FormFields>, FormRejection>,
) -> AppResult<Json<ApiResponse>> {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::debug!(calculator = calculator.key(), %rejection, "unreadable form body");
            FormFields::new()
        }
    };

    match photo_core::handle(calculator, &fields, state.catalog) {
        Ok(data) => Ok(Json(ApiResponse::success(data))),
        Err(err) if err.is_field_error() => {
            tracing::info!(calculator = calculator.key(), error = %err, "calculator input rejected");
            Ok(Json(ApiResponse::failure(err.user_message())))
        }
        Err(err) => Err(AppError::Calc(err)),
    }
}

/// POST /api/v1/dof
async fn depth_of_field(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> AppResult<Json<ApiResponse>> {
    run_calculator(Calculator::DepthOfField, &state, form)
}

/// POST /api/v1/print-size
async fn print_size(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> AppResult<Json<ApiResponse>> {
    run_calculator(Calculator::PrintSize, &state, form)
}

/// POST /api/v1/equipment-investment
async fn equipment_investment(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> AppResult<Json<ApiResponse>> {
    run_calculator(Calculator::EquipmentInvestment, &state, form)
}

fn post_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: axum::handler::Handler<T, AppState>,
    T: 'static,
{
    post(handler).fallback(|| async { AppError::MethodNotAllowed })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dof", post_only(depth_of_field))
        .route("/print-size", post_only(print_size))
        .route("/equipment-investment", post_only(equipment_investment))
}
