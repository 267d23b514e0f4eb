//! Data transfer objects for membership endpoints.

use serde::Serialize;

use crate::domain::membership::Membership;

/// Membership details as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub id: String,
    pub user: String,
    pub plan: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub created_at: String,
}

impl From<&Membership> for MembershipResponse {
    fn from(membership: &Membership) -> Self {
        Self {
            id: membership.id.to_string(),
            user: membership.user_id.to_string(),
            plan: membership.plan_id.to_string(),
            start_date: membership.start_date.as_datetime().to_rfc3339(),
            end_date: membership.end_date.as_datetime().to_rfc3339(),
            is_active: membership.is_active,
            created_at: membership.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// List of memberships visible to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipListResponse {
    pub memberships: Vec<MembershipResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MembershipId, PlanId, Timestamp, UserId};

    #[test]
    fn membership_response_renders_rfc3339_dates() {
        let now = Timestamp::now();
        let membership = Membership::activate(
            MembershipId::new(),
            UserId::new(),
            PlanId::new(),
            now,
            30,
        );

        let response = MembershipResponse::from(&membership);
        assert_eq!(response.id, membership.id.to_string());
        assert!(response.is_active);
        assert_eq!(response.start_date, now.as_datetime().to_rfc3339());
        assert_eq!(
            response.end_date,
            now.add_days(30).as_datetime().to_rfc3339()
        );
    }
}
