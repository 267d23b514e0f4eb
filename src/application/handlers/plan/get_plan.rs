//! GetPlanHandler - Query handler for fetching a single plan.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{MembershipPlan, PlanError};
use crate::ports::PlanRepository;

/// Query for a single plan. Plans are visible to every authenticated user.
#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub plan_id: PlanId,
}

/// Handler for fetching a plan.
pub struct GetPlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl GetPlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPlanQuery) -> Result<MembershipPlan, PlanError> {
        self.repository
            .find_by_id(&query.plan_id)
            .await?
            .ok_or_else(|| PlanError::not_found(query.plan_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, Money};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPlanRepository {
        plans: Mutex<Vec<MembershipPlan>>,
    }

    impl MockPlanRepository {
        fn with_plan(plan: MembershipPlan) -> Self {
            Self {
                plans: Mutex::new(vec![plan]),
            }
        }

        fn empty() -> Self {
            Self {
                plans: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlanRepository for MockPlanRepository {
        async fn save(&self, plan: &MembershipPlan) -> Result<(), DomainError> {
            self.plans.lock().unwrap().push(plan.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &PlanId) -> Result<Option<MembershipPlan>, DomainError> {
            Ok(self
                .plans
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == *id)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<MembershipPlan>, DomainError> {
            Ok(self.plans.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn returns_existing_plan() {
        let plan = MembershipPlan::new(
            PlanId::new(),
            "Annual",
            None,
            Money::from_cents(39900).unwrap(),
            365,
        )
        .unwrap();
        let repo = Arc::new(MockPlanRepository::with_plan(plan.clone()));

        let handler = GetPlanHandler::new(repo);
        let found = handler
            .handle(GetPlanQuery { plan_id: plan.id })
            .await
            .unwrap();

        assert_eq!(found.id, plan.id);
        assert_eq!(found.name, "Annual");
    }

    #[tokio::test]
    async fn unknown_plan_is_not_found() {
        let repo = Arc::new(MockPlanRepository::empty());

        let handler = GetPlanHandler::new(repo);
        let result = handler
            .handle(GetPlanQuery {
                plan_id: PlanId::new(),
            })
            .await;

        assert!(matches!(result, Err(PlanError::NotFound(_))));
    }
}
