//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! Shared pieces (application state, the authenticated-user extractor,
//! the error response shape and the top-level router) live here.

pub mod extract;
pub mod membership;
pub mod payment;
pub mod plan;

mod error;
mod router;
mod state;

// Re-export key types for convenience
pub use error::ErrorResponse;
pub use extract::AuthenticatedUser;
pub use router::router;
pub use state::AppState;
