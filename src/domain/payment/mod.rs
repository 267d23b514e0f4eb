//! Payment domain module.
//!
//! Payments are the entry point for memberships: a successful payment
//! that references a plan is activated into a new membership, and the
//! payment keeps a link back to the membership it created. Payments
//! can also reference an existing membership (a renewal-style record),
//! in which case no new membership is created.

mod activation;
mod aggregate;
mod errors;

pub use activation::{activate, Activation};
pub use aggregate::Payment;
pub use errors::PaymentError;
