use crate::credit_transfers;
use crate::models::{RouteEntry, RouteTableResponse};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /routes handler - The full credit transfer route table
///
/// Entries are returned in key order: NEW, LIST, DETAILS, EDIT.
#[utoipa::path(
    get,
    path = routes::ROUTE_TABLE,
    responses(
        (status = 200, description = "Credit transfer route table", body = RouteTableResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler() -> (StatusCode, Json<RouteTableResponse>) {
    let entries = credit_transfers::routes()
        .iter()
        .map(|(key, template)| RouteEntry {
            key: *key,
            template: template.to_string(),
            requires_id: key.requires_id(),
        })
        .collect::<Vec<_>>();

    tracing::info!("Listed {} credit transfer routes", entries.len());

    (
        StatusCode::OK,
        Json(RouteTableResponse {
            base_path: credit_transfers::base_path().to_string(),
            routes: entries,
        }),
    )
}
