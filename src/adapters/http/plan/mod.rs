//! HTTP adapter for membership plan endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::PlanResponse;
pub use routes::plan_routes;
