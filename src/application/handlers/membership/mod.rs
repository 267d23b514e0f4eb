//! Membership use cases.
//!
//! Memberships are read-only at this layer; creation happens inside
//! payment activation.

mod get_membership;
mod list_memberships;

pub use get_membership::{GetMembershipHandler, GetMembershipQuery};
pub use list_memberships::{ListMembershipsHandler, ListMembershipsQuery};
