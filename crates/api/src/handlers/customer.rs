//! Handlers for the `/customers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use customers_core::error::CoreError;
use customers_core::types::DbId;
use customers_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use customers_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::state::AppState;

const ENTITY: &str = "Customer";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /customers/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(customer))
}

/// POST /customers/
///
/// Responds 200 (not 201) with the stored row.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(customer_id = customer.id, "Customer created");
    Ok(Json(customer))
}

/// PATCH /customers/{id}
///
/// Writes only the keys present in the body. An empty body is rejected
/// before any statement is issued.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    if input.is_empty() {
        return Err(AppError::BadRequest(
            "No fields provided to update".to_string(),
        ));
    }
    let changes = input.changes()?;

    let customer = CustomerRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        customer_id = id,
        fields = changes.len(),
        "Customer updated",
    );
    Ok(Json(customer))
}

/// DELETE /customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CustomerRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(customer_id = id, "Customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
