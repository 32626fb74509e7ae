pub mod customers;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /customers/          list, create
/// /customers/{id}      get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(customers::router())
}
