//! Payment use cases.

mod create_payment;
mod get_payment;
mod list_payments;

pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler, CreatePaymentResult};
pub use get_payment::{GetPaymentHandler, GetPaymentQuery};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery};
