use serde::Deserialize;

use super::{DEFAULT_PRISMA_IMPORTER, IdMappingValue};

/// Options for the CRUD resolver pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CrudConfig {
    /// Skip the CRUD pass entirely
    pub disabled: bool,

    /// Emit `autocrud.ts`
    pub generate_autocrud: bool,

    /// How generated files import the Prisma namespace
    pub prisma_importer: String,

    /// How resolver files import the generated inputs
    pub inputs_importer: String,

    /// Expression resolvers use to reach the Prisma client
    pub prisma_caller: String,

    /// Extra import lines added to every resolver file
    pub resolver_imports: String,

    pub include_resolvers_exact: Vec<String>,
    pub include_resolvers_contain: Vec<String>,
    pub exclude_resolvers_exact: Vec<String>,
    pub exclude_resolvers_contain: Vec<String>,

    /// Expose `@id` fields as GraphQL `ID` in object types
    pub map_id_fields_to_graphql_id: ObjectIdMapping,

    /// Shape of the `createMany` resolver body
    pub create_many_mode: CreateManyMode,
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            generate_autocrud: true,
            prisma_importer: DEFAULT_PRISMA_IMPORTER.into(),
            inputs_importer: "import * as Inputs from '../../inputs';".into(),
            prisma_caller: "context.prisma".into(),
            resolver_imports: String::new(),
            include_resolvers_exact: Vec::new(),
            include_resolvers_contain: Vec::new(),
            exclude_resolvers_exact: Vec::new(),
            exclude_resolvers_contain: Vec::new(),
            map_id_fields_to_graphql_id: ObjectIdMapping::default(),
            create_many_mode: CreateManyMode::default(),
        }
    }
}

/// `crud.mapIdFieldsToGraphqlId`: `false` or `"Objects"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "IdMappingValue")]
pub enum ObjectIdMapping {
    #[default]
    Disabled,
    Objects,
}

impl TryFrom<IdMappingValue> for ObjectIdMapping {
    type Error = String;

    fn try_from(value: IdMappingValue) -> Result<Self, Self::Error> {
        match value {
            IdMappingValue::Flag(false) => Ok(Self::Disabled),
            IdMappingValue::Mode(mode) if mode == "Objects" => Ok(Self::Objects),
            other => Err(format!(
                "expected false or \"Objects\", found {}",
                other.describe()
            )),
        }
    }
}

/// How `createMany` persists its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateManyMode {
    /// One `createManyAndReturn` call with the projected selection
    #[default]
    Bulk,
    /// One `create` per row inside `$transaction`
    Transaction,
}
