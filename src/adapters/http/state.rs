//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::membership::{GetMembershipHandler, ListMembershipsHandler};
use crate::application::handlers::payment::{
    CreatePaymentHandler, GetPaymentHandler, ListPaymentsHandler,
};
use crate::application::handlers::plan::{CreatePlanHandler, GetPlanHandler, ListPlansHandler};
use crate::ports::{MembershipRepository, PaymentRepository, PlanRepository};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub plan_repository: Arc<dyn PlanRepository>,
    pub payment_repository: Arc<dyn PaymentRepository>,
    pub membership_repository: Arc<dyn MembershipRepository>,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn create_payment_handler(&self) -> CreatePaymentHandler {
        CreatePaymentHandler::new(
            self.payment_repository.clone(),
            self.plan_repository.clone(),
            self.membership_repository.clone(),
        )
    }

    pub fn get_payment_handler(&self) -> GetPaymentHandler {
        GetPaymentHandler::new(self.payment_repository.clone())
    }

    pub fn list_payments_handler(&self) -> ListPaymentsHandler {
        ListPaymentsHandler::new(self.payment_repository.clone())
    }

    pub fn create_plan_handler(&self) -> CreatePlanHandler {
        CreatePlanHandler::new(self.plan_repository.clone())
    }

    pub fn get_plan_handler(&self) -> GetPlanHandler {
        GetPlanHandler::new(self.plan_repository.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.plan_repository.clone())
    }

    pub fn get_membership_handler(&self) -> GetMembershipHandler {
        GetMembershipHandler::new(self.membership_repository.clone())
    }

    pub fn list_memberships_handler(&self) -> ListMembershipsHandler {
        ListMembershipsHandler::new(self.membership_repository.clone())
    }
}
