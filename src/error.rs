use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::credit_transfers::{RouteKey, UnknownRouteKey};
use crate::links::LinkError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and renders it as a JSON
/// [`ErrorResponse`].
#[derive(Debug)]
pub enum ApiError {
    /// Path segment does not name a route key
    UnknownRouteKey(UnknownRouteKey),
    /// Parameterized route requested without an `id`
    MissingId(RouteKey),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::UnknownRouteKey(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::MissingId(key) => (
                StatusCode::BAD_REQUEST,
                LinkError::MissingId(key).to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<UnknownRouteKey> for ApiError {
    fn from(err: UnknownRouteKey) -> Self {
        ApiError::UnknownRouteKey(err)
    }
}

impl From<LinkError> for ApiError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::MissingId(key) => ApiError::MissingId(key),
        }
    }
}
