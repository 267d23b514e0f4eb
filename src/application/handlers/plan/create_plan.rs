//! CreatePlanHandler - Command handler for creating a membership plan.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Money, PlanId, Role, ValidationError};
use crate::domain::plan::{MembershipPlan, PlanError};
use crate::ports::PlanRepository;

/// Command to create a plan. Staff and admin only.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub role: Role,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub duration_in_days: i32,
}

/// Handler for creating membership plans.
pub struct CreatePlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl CreatePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<MembershipPlan, PlanError> {
        if !cmd.role.can_manage_plans() {
            return Err(PlanError::forbidden());
        }

        let plan = MembershipPlan::new(
            PlanId::new(),
            cmd.name,
            cmd.description,
            cmd.price,
            cmd.duration_in_days,
        )
        .map_err(|e| {
            let field = match &e {
                ValidationError::EmptyField { field }
                | ValidationError::OutOfRange { field, .. }
                | ValidationError::InvalidFormat { field, .. } => field.clone(),
            };
            PlanError::validation(field, e.to_string())
        })?;

        self.repository.save(&plan).await?;

        info!(plan_id = %plan.id, name = %plan.name, "plan created");

        Ok(plan)
    }
}
