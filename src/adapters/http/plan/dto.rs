//! Data transfer objects for plan endpoints.
//!
//! Prices cross the wire as decimal strings ("49.99") and are parsed
//! into cents at the boundary.

use serde::{Deserialize, Serialize};

use crate::domain::plan::MembershipPlan;

/// Request to create a membership plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    pub duration_in_days: i32,
}

/// Plan details as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub duration_in_days: i32,
    pub created_at: String,
}

impl From<&MembershipPlan> for PlanResponse {
    fn from(plan: &MembershipPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: plan.price.to_string(),
            duration_in_days: plan.duration_in_days,
            created_at: plan.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// List of plans in the catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<PlanResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, PlanId};

    #[test]
    fn plan_response_renders_price_as_decimal_string() {
        let plan = MembershipPlan::new(
            PlanId::new(),
            "Monthly".to_string(),
            None,
            Money::from_cents(4999).unwrap(),
            30,
        )
        .unwrap();

        let response = PlanResponse::from(&plan);
        assert_eq!(response.price, "49.99");
        assert_eq!(response.duration_in_days, 30);
    }

    #[test]
    fn create_plan_request_defaults_description() {
        let request: CreatePlanRequest = serde_json::from_str(
            r#"{ "name": "Annual", "price": "399.00", "duration_in_days": 365 }"#,
        )
        .unwrap();
        assert!(request.description.is_none());
    }
}
