use serde::{Deserialize, Serialize};

use crate::credit_transfers::RouteKey;

/// One entry of the route table
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteEntry {
    pub key: RouteKey,
    pub template: String,
    pub requires_id: bool,
}

/// Response type for the route table endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteTableResponse {
    pub base_path: String,
    pub routes: Vec<RouteEntry>,
}

/// Query parameters for the single route endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteQuery {
    /// Identifier substituted for the `:id` placeholder
    pub id: Option<String>,
}

/// Response type for the single route endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteResponse {
    pub key: RouteKey,
    pub template: String,
    pub href: String,
}
