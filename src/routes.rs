// Route path constants for this service's own endpoints

pub const HEALTH: &str = "/health";
pub const ROUTE_TABLE: &str = "/routes";
pub const ROUTE_ITEM: &str = "/routes/{key}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
