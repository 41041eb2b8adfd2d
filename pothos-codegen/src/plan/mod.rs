//! CRUD planning: the operation set, name filtering and the per-model plan.

mod crud;
mod filter;
mod operation;

pub use crud::{CrudPlan, ModelPlan, ResolverRecord};
pub use filter::{FilterDecision, ResolverFilter};
pub use operation::{Operation, ResolverKind};
