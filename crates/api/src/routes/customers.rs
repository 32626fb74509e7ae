//! Route definitions for the customers resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Customer routes, mounted at the root.
///
/// The collection answers with and without a trailing slash.
///
/// ```text
/// GET    /customers/         -> list
/// POST   /customers/         -> create
/// GET    /customers/{id}     -> get_by_id
/// PATCH  /customers/{id}     -> update
/// DELETE /customers/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customer::list).post(customer::create))
        .route("/customers/", get(customer::list).post(customer::create))
        .route(
            "/customers/{id}",
            get(customer::get_by_id)
                .patch(customer::update)
                .delete(customer::delete),
        )
}
