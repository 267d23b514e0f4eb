//! ListMembershipsHandler - Query handler for listing memberships.

use std::sync::Arc;

use crate::domain::foundation::{Role, UserId};
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::MembershipRepository;

/// Query for a membership listing.
#[derive(Debug, Clone)]
pub struct ListMembershipsQuery {
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for listing memberships.
///
/// Members get their own memberships; staff and admins get everything.
pub struct ListMembershipsHandler {
    repository: Arc<dyn MembershipRepository>,
}

impl ListMembershipsHandler {
    pub fn new(repository: Arc<dyn MembershipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListMembershipsQuery,
    ) -> Result<Vec<Membership>, MembershipError> {
        let memberships = if query.role.can_manage_plans() {
            self.repository.list().await?
        } else {
            self.repository.list_by_user(&query.user_id).await?
        };
        Ok(memberships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, MembershipId, PlanId, Timestamp};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMembershipRepository {
        memberships: Mutex<Vec<Membership>>,
    }

    #[async_trait]
    impl MembershipRepository for MockMembershipRepository {
        async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == *id)
                .cloned())
        }

        async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Membership>, DomainError> {
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.user_id == *user_id)
                .cloned()
                .collect())
        }

        async fn list(&self) -> Result<Vec<Membership>, DomainError> {
            Ok(self.memberships.lock().unwrap().clone())
        }
    }

    fn membership_for(user_id: UserId) -> Membership {
        Membership::activate(
            MembershipId::new(),
            user_id,
            PlanId::new(),
            Timestamp::now(),
            30,
        )
    }

    #[tokio::test]
    async fn member_sees_only_own_memberships() {
        let member = UserId::new();
        let repo = Arc::new(MockMembershipRepository {
            memberships: Mutex::new(vec![
                membership_for(member),
                membership_for(UserId::new()),
            ]),
        });

        let handler = ListMembershipsHandler::new(repo);
        let memberships = handler
            .handle(ListMembershipsQuery {
                user_id: member,
                role: Role::Member,
            })
            .await
            .unwrap();

        assert_eq!(memberships.len(), 1);
        assert_eq!(memberships[0].user_id, member);
    }

    #[tokio::test]
    async fn staff_sees_all_memberships() {
        let repo = Arc::new(MockMembershipRepository {
            memberships: Mutex::new(vec![
                membership_for(UserId::new()),
                membership_for(UserId::new()),
                membership_for(UserId::new()),
            ]),
        });

        let handler = ListMembershipsHandler::new(repo);
        let memberships = handler
            .handle(ListMembershipsQuery {
                user_id: UserId::new(),
                role: Role::Staff,
            })
            .await
            .unwrap();

        assert_eq!(memberships.len(), 3);
    }
}
