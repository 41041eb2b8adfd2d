//! Built-in lints.

mod duplicate_model;
mod empty_model;
mod reserved_model_name;
mod unknown_relation;
mod unused_filter;

pub use duplicate_model::DuplicateModelLint;
pub use empty_model::EmptyModelLint;
pub use reserved_model_name::ReservedModelNameLint;
pub use unknown_relation::UnknownRelationLint;
pub use unused_filter::UnusedFilterLint;
