//! Adapters - Implementations of ports for external systems.

pub mod http;
pub mod postgres;
