//! GetMembershipHandler - Query handler for fetching a single membership.

use std::sync::Arc;

use crate::domain::foundation::{MembershipId, Role, UserId};
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::MembershipRepository;

/// Query for a single membership.
#[derive(Debug, Clone)]
pub struct GetMembershipQuery {
    pub membership_id: MembershipId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for fetching a membership.
///
/// Members see only their own memberships; staff and admins see all.
/// Someone else's membership reads as not-found rather than forbidden.
pub struct GetMembershipHandler {
    repository: Arc<dyn MembershipRepository>,
}

impl GetMembershipHandler {
    pub fn new(repository: Arc<dyn MembershipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMembershipQuery) -> Result<Membership, MembershipError> {
        let membership = self
            .repository
            .find_by_id(&query.membership_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(query.membership_id))?;

        if membership.user_id != query.user_id && !query.role.can_manage_plans() {
            return Err(MembershipError::not_found(query.membership_id));
        }

        Ok(membership)
    }
}
