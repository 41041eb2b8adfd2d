use indexmap::IndexMap;
use serde::Deserialize;

use super::{DEFAULT_PRISMA_IMPORTER, IdMappingValue};

/// Key in `excludeInputFields` tables that applies to every model.
pub const ALL_MODELS: &str = "$all";

/// Options for the `inputs.ts` pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InputsConfig {
    /// Skip the inputs pass entirely
    pub disabled: bool,

    pub prisma_importer: String,

    /// Scalars the user declares themselves (e.g. `DateTime`)
    pub exclude_scalars: Vec<String>,

    pub exclude_input_fields: ExcludeInputFields,

    pub map_id_fields_to_graphql_id: InputIdMapping,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            prisma_importer: DEFAULT_PRISMA_IMPORTER.into(),
            exclude_scalars: Vec::new(),
            exclude_input_fields: ExcludeInputFields::default(),
            map_id_fields_to_graphql_id: InputIdMapping::default(),
        }
    }
}

impl InputsConfig {
    /// Whether the user opted out of a generated scalar declaration.
    pub fn excludes_scalar(&self, name: &str) -> bool {
        self.exclude_scalars.iter().any(|s| s == name)
    }
}

/// Input shape categories that exclusion lists and `@Pothos.omit` key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCategory {
    Create,
    Update,
    Where,
    OrderBy,
}

impl InputCategory {
    pub const ALL: [InputCategory; 4] = [
        InputCategory::Create,
        InputCategory::Update,
        InputCategory::Where,
        InputCategory::OrderBy,
    ];

    /// Name as written in config keys and `@Pothos.omit(...)` arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputCategory::Create => "create",
            InputCategory::Update => "update",
            InputCategory::Where => "where",
            InputCategory::OrderBy => "orderBy",
        }
    }

    /// The keyword that follows the model name in Prisma input names.
    pub fn keyword(&self) -> &'static str {
        match self {
            InputCategory::Create => "Create",
            InputCategory::Update => "Update",
            InputCategory::Where => "Where",
            InputCategory::OrderBy => "OrderBy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Field names dropped from input types, keyed by model name or `$all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExcludeInputFields {
    pub create: IndexMap<String, Vec<String>>,
    pub update: IndexMap<String, Vec<String>>,
    #[serde(rename = "where")]
    pub where_: IndexMap<String, Vec<String>>,
    pub order_by: IndexMap<String, Vec<String>>,
}

impl ExcludeInputFields {
    fn table(&self, category: InputCategory) -> &IndexMap<String, Vec<String>> {
        match category {
            InputCategory::Create => &self.create,
            InputCategory::Update => &self.update,
            InputCategory::Where => &self.where_,
            InputCategory::OrderBy => &self.order_by,
        }
    }

    /// Excluded field names for a model: the `$all` list followed by the
    /// model's own list.
    pub fn excluded(&self, category: InputCategory, model: &str) -> Vec<&str> {
        let table = self.table(category);
        [ALL_MODELS, model]
            .iter()
            .filter_map(|key| table.get(*key))
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// `inputs.mapIdFieldsToGraphqlId`: `false` or `"WhereUniqueInputs"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "IdMappingValue")]
pub enum InputIdMapping {
    #[default]
    Disabled,
    WhereUniqueInputs,
}

impl TryFrom<IdMappingValue> for InputIdMapping {
    type Error = String;

    fn try_from(value: IdMappingValue) -> Result<Self, Self::Error> {
        match value {
            IdMappingValue::Flag(false) => Ok(Self::Disabled),
            IdMappingValue::Mode(mode) if mode == "WhereUniqueInputs" => {
                Ok(Self::WhereUniqueInputs)
            }
            other => Err(format!(
                "expected false or \"WhereUniqueInputs\", found {}",
                other.describe()
            )),
        }
    }
}
