//! Which resolvers survive for each model.

use pothos_crud_config::CrudConfig;
use pothos_crud_schema::Document;
use serde::Serialize;

use super::{Operation, ResolverFilter, ResolverKind};

/// Bookkeeping entry for one surviving resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverRecord {
    pub resolver_name: String,
    pub model_name: String,
    pub kind: ResolverKind,
    pub operation: Operation,
}

/// Surviving operations of one model, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelPlan {
    pub name: String,
    pub queries: Vec<Operation>,
    pub mutations: Vec<Operation>,
}

impl ModelPlan {
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.queries.iter().chain(self.mutations.iter()).copied()
    }

    pub fn of_kind(&self, kind: ResolverKind) -> &[Operation] {
        match kind {
            ResolverKind::Query => &self.queries,
            ResolverKind::Mutation => &self.mutations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty() && self.mutations.is_empty()
    }
}

/// The full CRUD plan: per-model operations plus the flat resolver table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrudPlan {
    pub models: Vec<ModelPlan>,
    pub records: Vec<ResolverRecord>,
}

impl CrudPlan {
    /// Apply the resolver filter to every (model, operation) pair.
    pub fn build(document: &Document, config: &CrudConfig) -> Self {
        let filter = ResolverFilter::new(config);
        let mut plan = CrudPlan::default();

        for model in document.models() {
            let mut model_plan = ModelPlan {
                name: model.name.clone(),
                queries: Vec::new(),
                mutations: Vec::new(),
            };

            for op in Operation::ALL {
                let resolver_name = op.resolver_name(&model.name);
                let decision = filter.decide(&resolver_name);
                if !decision.keeps() {
                    tracing::debug!(resolver = %resolver_name, reason = decision.reason(), "skipping resolver");
                    continue;
                }

                match op.kind() {
                    ResolverKind::Query => model_plan.queries.push(op),
                    ResolverKind::Mutation => model_plan.mutations.push(op),
                }
                plan.records.push(ResolverRecord {
                    resolver_name,
                    model_name: model.name.clone(),
                    kind: op.kind(),
                    operation: op,
                });
            }

            plan.models.push(model_plan);
        }

        plan
    }

    pub fn model(&self, name: &str) -> Option<&ModelPlan> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn resolver_count(&self) -> usize {
        self.records.len()
    }

    pub fn records_of(&self, kind: ResolverKind) -> impl Iterator<Item = &ResolverRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }
}
