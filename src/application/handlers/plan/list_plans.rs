//! ListPlansHandler - Query handler for the plan catalogue.

use std::sync::Arc;

use crate::domain::plan::{MembershipPlan, PlanError};
use crate::ports::PlanRepository;

/// Handler for listing all plans. No role restriction; members browse
/// the catalogue before buying.
pub struct ListPlansHandler {
    repository: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<MembershipPlan>, PlanError> {
        Ok(self.repository.list().await?)
    }
}
