//! Per-operation resolver templates.
//!
//! Each (model, operation) pair lowers to a [`ResolverArtifact`]: the
//! argument list, the declared output, and the Prisma call the resolver
//! makes. The printer in `files::resolver_ts` turns it into TypeScript.

use pothos_crud_codegen::plan::{Operation, ResolverKind};
use pothos_crud_config::{CreateManyMode, CrudConfig};
use pothos_crud_core::first_letter_lowercase;

/// Type of a resolver argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    /// A generated input or enum, referenced as `Inputs.{name}`.
    Input { name: String, list: bool },
    /// A built-in GraphQL scalar such as `Int`.
    Scalar(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: ArgType,
    pub required: bool,
}

impl ArgSpec {
    fn input(name: &'static str, type_name: String, required: bool) -> Self {
        Self {
            name,
            ty: ArgType::Input {
                name: type_name,
                list: false,
            },
            required,
        }
    }

    fn input_list(name: &'static str, type_name: String, required: bool) -> Self {
        Self {
            name,
            ty: ArgType::Input {
                name: type_name,
                list: true,
            },
            required,
        }
    }

    fn scalar(name: &'static str, scalar: &'static str) -> Self {
        Self {
            name,
            ty: ArgType::Scalar(scalar),
            required: false,
        }
    }
}

/// What the generated field resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Model,
    ModelList,
    Int,
    /// The shared `BatchPayload` object from `objects.ts`.
    BatchPayload,
}

/// How the resolver reaches Prisma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveBody {
    /// `await caller.model.method({ params, ...query })`
    Call {
        method: &'static str,
        params: Vec<(&'static str, &'static str)>,
        spread_query: bool,
    },
    /// `await caller.$transaction(args.data.map((data) => caller.model.create({ data, ...query })))`
    TransactionCreate,
}

/// A resolver for one (model, operation) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverArtifact {
    pub model: String,
    pub operation: Operation,
    pub args: Vec<ArgSpec>,
    pub output: OutputType,
    pub nullable: bool,
    pub body: ResolveBody,
}

const OPTIONAL_WHERE: (&str, &str) = ("where", "args.where || undefined");

impl ResolverArtifact {
    pub fn build(model: &str, operation: Operation, config: &CrudConfig) -> Self {
        let m = model;
        let (args, output, nullable, body) = match operation {
            Operation::FindFirst | Operation::FindMany => (
                list_args(m, true),
                if operation == Operation::FindMany {
                    OutputType::ModelList
                } else {
                    OutputType::Model
                },
                operation == Operation::FindFirst,
                ResolveBody::Call {
                    method: operation.name(),
                    params: list_params(true),
                    spread_query: true,
                },
            ),
            Operation::Count => (
                list_args(m, false),
                OutputType::Int,
                false,
                ResolveBody::Call {
                    method: "count",
                    params: list_params(false),
                    spread_query: false,
                },
            ),
            Operation::FindUnique => (
                vec![ArgSpec::input("where", format!("{m}WhereUniqueInput"), true)],
                OutputType::Model,
                true,
                ResolveBody::Call {
                    method: "findUnique",
                    params: vec![("where", "args.where")],
                    spread_query: true,
                },
            ),
            Operation::CreateOne => (
                vec![ArgSpec::input("data", format!("{m}CreateInput"), true)],
                OutputType::Model,
                false,
                ResolveBody::Call {
                    method: "create",
                    params: vec![("data", "args.data")],
                    spread_query: true,
                },
            ),
            Operation::CreateMany => (
                vec![ArgSpec::input_list("data", format!("{m}CreateManyInput"), true)],
                OutputType::ModelList,
                false,
                match config.create_many_mode {
                    CreateManyMode::Bulk => ResolveBody::Call {
                        method: "createManyAndReturn",
                        params: vec![("data", "args.data"), ("select", "query.select")],
                        spread_query: false,
                    },
                    CreateManyMode::Transaction => ResolveBody::TransactionCreate,
                },
            ),
            Operation::UpdateOne => (
                vec![
                    ArgSpec::input("where", format!("{m}WhereUniqueInput"), true),
                    ArgSpec::input("data", format!("{m}UpdateInput"), true),
                ],
                OutputType::Model,
                true,
                ResolveBody::Call {
                    method: "update",
                    params: vec![("where", "args.where"), ("data", "args.data")],
                    spread_query: true,
                },
            ),
            Operation::UpdateMany => (
                vec![
                    ArgSpec::input("where", format!("{m}WhereInput"), false),
                    ArgSpec::input("data", format!("{m}UpdateManyMutationInput"), true),
                ],
                OutputType::BatchPayload,
                false,
                ResolveBody::Call {
                    method: "updateMany",
                    params: vec![OPTIONAL_WHERE, ("data", "args.data")],
                    spread_query: false,
                },
            ),
            Operation::UpsertOne => (
                vec![
                    ArgSpec::input("where", format!("{m}WhereUniqueInput"), true),
                    ArgSpec::input("create", format!("{m}CreateInput"), true),
                    ArgSpec::input("update", format!("{m}UpdateInput"), true),
                ],
                OutputType::Model,
                false,
                ResolveBody::Call {
                    method: "upsert",
                    params: vec![
                        ("where", "args.where"),
                        ("create", "args.create"),
                        ("update", "args.update"),
                    ],
                    spread_query: true,
                },
            ),
            Operation::DeleteOne => (
                vec![ArgSpec::input("where", format!("{m}WhereUniqueInput"), true)],
                OutputType::Model,
                true,
                ResolveBody::Call {
                    method: "delete",
                    params: vec![("where", "args.where")],
                    spread_query: true,
                },
            ),
            Operation::DeleteMany => (
                vec![ArgSpec::input("where", format!("{m}WhereInput"), true)],
                OutputType::BatchPayload,
                true,
                ResolveBody::Call {
                    method: "deleteMany",
                    params: vec![("where", "args.where")],
                    spread_query: false,
                },
            ),
        };

        Self {
            model: model.to_string(),
            operation,
            args,
            output,
            nullable,
            body,
        }
    }

    pub fn kind(&self) -> ResolverKind {
        self.operation.kind()
    }

    /// `findFirstUser`, the GraphQL field name.
    pub fn field_name(&self) -> String {
        self.operation.resolver_name(&self.model)
    }

    /// `findFirstUserQuery`, the exported field definer.
    pub fn export_name(&self) -> String {
        format!("{}{}", self.field_name(), self.kind())
    }

    /// `findFirstUserQueryArgs`
    pub fn args_name(&self) -> String {
        format!("{}Args", self.export_name())
    }

    /// `findFirstUserQueryObject`
    pub fn object_name(&self) -> String {
        format!("{}Object", self.export_name())
    }

    /// Prisma client delegate, e.g. `context.prisma.user`.
    pub fn delegate(&self, prisma_caller: &str) -> String {
        format!("{prisma_caller}.{}", first_letter_lowercase(&self.model))
    }
}

fn list_args(m: &str, distinct: bool) -> Vec<ArgSpec> {
    let mut args = vec![
        ArgSpec::input("where", format!("{m}WhereInput"), false),
        ArgSpec::input_list("orderBy", format!("{m}OrderByWithRelationInput"), false),
        ArgSpec::input("cursor", format!("{m}WhereUniqueInput"), false),
        ArgSpec::scalar("take", "Int"),
        ArgSpec::scalar("skip", "Int"),
    ];
    if distinct {
        args.push(ArgSpec::input_list("distinct", format!("{m}ScalarFieldEnum"), false));
    }
    args
}

fn list_params(distinct: bool) -> Vec<(&'static str, &'static str)> {
    let mut params = vec![
        OPTIONAL_WHERE,
        ("cursor", "args.cursor || undefined"),
        ("take", "args.take || undefined"),
        ("skip", "args.skip || undefined"),
        ("orderBy", "args.orderBy || undefined"),
    ];
    if distinct {
        params.push(("distinct", "args.distinct || undefined"));
    }
    params
}
