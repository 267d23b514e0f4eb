//! Application layer.
//!
//! Command and query handlers orchestrating domain operations over the
//! repository ports. Each handler owns exactly one use case.

pub mod handlers;
