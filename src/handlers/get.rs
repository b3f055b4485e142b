use crate::credit_transfers::RouteKey;
use crate::error::{ApiError, ErrorResponse};
use crate::links;
use crate::models::{RouteQuery, RouteResponse};
use crate::routes;
use axum::{extract::Path, extract::Query, http::StatusCode, Json};

/// GET /routes/{key} handler - Look up one credit transfer route
///
/// When `id` is supplied it is substituted for the placeholder to build `href`.
#[utoipa::path(
    get,
    path = routes::ROUTE_ITEM,
    params(
        ("key" = String, Path, description = "Route key: NEW, LIST, DETAILS or EDIT (case-insensitive)"),
        RouteQuery
    ),
    responses(
        (status = 200, description = "Route found", body = RouteResponse),
        (status = 400, description = "Missing id for a parameterized route", body = ErrorResponse),
        (status = 404, description = "Unknown route key", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn get_handler(
    Path(key_str): Path<String>,
    Query(query): Query<RouteQuery>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    let key = key_str.parse::<RouteKey>().inspect_err(|_| {
        tracing::info!("Unknown route key requested: {}", key_str);
    })?;

    let href = links::href(key, query.id.as_deref())?;

    tracing::info!("Resolved route {} to {}", key, href);
    Ok((
        StatusCode::OK,
        Json(RouteResponse {
            key,
            template: key.template().to_string(),
            href,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::ROUTE_ITEM, get(get_handler))
    }

    async fn send(uri: &str) -> (StatusCode, axum::body::Bytes) {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_get_endpoint_static_route() {
        let (status, body) = send("/routes/NEW").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: RouteResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.key, RouteKey::New);
        assert_eq!(response_json.template, "/credit-transfers/new");
        assert_eq!(response_json.href, "/credit-transfers/new");
    }

    #[tokio::test]
    async fn test_get_endpoint_substitutes_id() {
        let (status, body) = send("/routes/edit?id=17").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: RouteResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.key, RouteKey::Edit);
        assert_eq!(response_json.template, "/credit-transfers/:id/edit");
        assert_eq!(response_json.href, "/credit-transfers/17/edit");
    }

    #[tokio::test]
    async fn test_get_endpoint_missing_id() {
        let (status, body) = send("/routes/DETAILS").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            error_response.error,
            "Missing required parameter 'id' for route DETAILS"
        );
    }

    #[tokio::test]
    async fn test_get_endpoint_unknown_key() {
        let (status, body) = send("/routes/DELETE").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Unknown route key"));
        assert!(error_response.error.contains("DELETE"));
    }
}
