use utoipa::OpenApi;

use crate::credit_transfers::RouteKey;
use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{RouteEntry, RouteResponse, RouteTableResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "credit-transfer-routes API",
        version = "1.0.0",
        description = "Path templates for the credit transfers feature"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(
            RouteKey,
            RouteEntry,
            RouteTableResponse,
            RouteResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Credit transfer route templates")
    )
)]
pub struct ApiDoc;
