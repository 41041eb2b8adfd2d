//! The fixed set of CRUD operations.

use serde::Serialize;

/// Whether a resolver hangs off the root `Query` or `Mutation` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResolverKind {
    Query,
    Mutation,
}

impl ResolverKind {
    /// Suffix used in generated symbol names (`findManyUserQuery`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverKind::Query => "Query",
            ResolverKind::Mutation => "Mutation",
        }
    }

    /// Directory under a model that holds resolvers of this kind.
    pub fn dir(&self) -> &'static str {
        match self {
            ResolverKind::Query => "queries",
            ResolverKind::Mutation => "mutations",
        }
    }
}

impl std::fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eleven CRUD operations generated per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    FindFirst,
    FindMany,
    FindUnique,
    Count,
    CreateOne,
    CreateMany,
    UpdateOne,
    UpdateMany,
    UpsertOne,
    DeleteOne,
    DeleteMany,
}

impl Operation {
    /// Every operation in generation order.
    pub const ALL: [Operation; 11] = [
        Operation::FindFirst,
        Operation::FindMany,
        Operation::FindUnique,
        Operation::Count,
        Operation::CreateOne,
        Operation::CreateMany,
        Operation::UpdateOne,
        Operation::UpdateMany,
        Operation::UpsertOne,
        Operation::DeleteOne,
        Operation::DeleteMany,
    ];

    pub const QUERIES: [Operation; 4] = [
        Operation::FindFirst,
        Operation::FindMany,
        Operation::FindUnique,
        Operation::Count,
    ];

    pub const MUTATIONS: [Operation; 7] = [
        Operation::CreateOne,
        Operation::CreateMany,
        Operation::UpdateOne,
        Operation::UpdateMany,
        Operation::UpsertOne,
        Operation::DeleteOne,
        Operation::DeleteMany,
    ];

    /// Name as it appears in resolver names and file names.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FindFirst => "findFirst",
            Operation::FindMany => "findMany",
            Operation::FindUnique => "findUnique",
            Operation::Count => "count",
            Operation::CreateOne => "createOne",
            Operation::CreateMany => "createMany",
            Operation::UpdateOne => "updateOne",
            Operation::UpdateMany => "updateMany",
            Operation::UpsertOne => "upsertOne",
            Operation::DeleteOne => "deleteOne",
            Operation::DeleteMany => "deleteMany",
        }
    }

    pub fn kind(&self) -> ResolverKind {
        match self {
            Operation::FindFirst
            | Operation::FindMany
            | Operation::FindUnique
            | Operation::Count => ResolverKind::Query,
            _ => ResolverKind::Mutation,
        }
    }

    /// Batch operations return the shared count payload instead of records.
    pub fn is_batch(&self) -> bool {
        matches!(self, Operation::UpdateMany | Operation::DeleteMany)
    }

    /// Projecting operations forward the caller's selection into Prisma.
    pub fn is_projecting(&self) -> bool {
        !self.is_batch()
    }

    /// `${operation}${model}`, the name every filter and table keys on.
    pub fn resolver_name(&self, model: &str) -> String {
        format!("{}{}", self.name(), model)
    }

    pub fn parse(name: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
