//! Local versions of axum's [`Json`](axum::Json) and [`Path`](axum::extract::Path)
//! extractors that reject through [`AppError`], so malformed input gets the same
//! `{"detail": ...}` body as every other error.

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON request body / response extractor.
///
/// A missing required field or a type mismatch rejects with 422, a syntax
/// error with 400, and a missing `Content-Type: application/json` with 415.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
