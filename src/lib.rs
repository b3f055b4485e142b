//! Single source of truth for the credit transfers route templates, plus a
//! small HTTP service that publishes them.

pub mod api_doc;
pub mod app;
pub mod config;
pub mod credit_transfers;
pub mod error;
pub mod handlers;
pub mod links;
pub mod models;
pub mod routes;
pub mod state;

pub use credit_transfers::{RouteKey, base_path};
