//! Gymcore - Gym Management Backend
//!
//! Implements the membership side of a gym management system:
//! purchasable membership plans, payment recording, and the activation
//! flow that turns a successful payment into a time-bounded membership.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
