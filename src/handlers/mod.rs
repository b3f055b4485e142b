pub mod health;
pub mod list;
pub mod get;

pub use health::health_handler;
pub use list::list_handler;
pub use get::get_handler;
