//! Plan use cases.

mod create_plan;
mod get_plan;
mod list_plans;

pub use create_plan::{CreatePlanCommand, CreatePlanHandler};
pub use get_plan::{GetPlanHandler, GetPlanQuery};
pub use list_plans::ListPlansHandler;
