//! Input type selection and field lowering for `inputs.ts`.
//!
//! Prisma enumerates every input shape it accepts. Only the ones generated
//! resolvers can reach are declared: shared filters and update operations,
//! and the per-model where/create/update/upsert/order-by shapes.

use std::collections::HashSet;

use pothos_crud_config::{Config, InputCategory, InputIdMapping};
use pothos_crud_schema::{
    Document, InputField, InputObjectType, Model, TypeLocation, main_input,
};

use crate::{
    fields::Documentation,
    type_mapper::{PothosTypeMapper, strip_unchecked},
};

/// Name fragments that mark an input shared between models.
const SHARED_KEYWORDS: [&str; 3] = ["Filter", "Compound", "UpdateOperations"];

/// Keywords that follow a model name in model-specific input names.
const MODEL_KEYWORDS: [&str; 11] = [
    "Where",
    "ScalarWhere",
    "Create",
    "Update",
    "Upsert",
    "OrderBy",
    "CountOrderBy",
    "MaxOrderBy",
    "MinOrderBy",
    "AvgOrderBy",
    "SumOrderBy",
];

/// Relation mutation fields stripped when `noNestedInput` is set.
pub const NESTED_MUTATION_FIELDS: [&str; 8] = [
    "create",
    "connectOrCreate",
    "createMany",
    "upsert",
    "update",
    "updateMany",
    "delete",
    "deleteMany",
];

/// How an input field is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFieldType {
    /// A builder shorthand: `t.int(..)`, `t.stringList(..)`, `t.id(..)`.
    Shorthand(String),
    /// `t.field({ type: X })` referencing a declared input, enum or scalar.
    Field { type_name: String, list: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFieldDecl {
    pub name: String,
    pub required: bool,
    pub ty: InputFieldType,
}

/// One input type to declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDecl {
    /// Declared name, `Unchecked` stripped.
    pub name: String,
    /// Name of the Prisma type the declaration is checked against.
    pub prisma_name: String,
    pub category: Option<InputCategory>,
    pub fields: Vec<InputFieldDecl>,
    /// Fields removed by `noNestedInput`, exclusion lists or omissions.
    pub dropped: Vec<String>,
}

impl InputDecl {
    /// An input without fields is declared with a single `NEVER` field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Picks the inputs to declare and lowers their fields.
pub struct InputSelector<'a> {
    document: &'a Document,
    config: &'a Config,
}

impl<'a> InputSelector<'a> {
    pub fn new(document: &'a Document, config: &'a Config) -> Self {
        Self { document, config }
    }

    /// The model an input belongs to. The longest matching model name wins,
    /// so `UserProfileWhereInput` goes to `UserProfile` rather than `User`.
    pub fn owner(&self, input_name: &str) -> Option<&'a Model> {
        self.document
            .models()
            .iter()
            .filter(|model| {
                input_name
                    .strip_prefix(model.name.as_str())
                    .is_some_and(|rest| MODEL_KEYWORDS.iter().any(|kw| rest.starts_with(kw)))
            })
            .max_by_key(|model| model.name.len())
    }

    pub fn is_selected(&self, input_name: &str) -> bool {
        SHARED_KEYWORDS.iter().any(|kw| input_name.contains(kw)) || self.owner(input_name).is_some()
    }

    /// Every declared input, in schema order.
    pub fn select(&self) -> Vec<InputDecl> {
        let all: HashSet<&str> = self
            .document
            .input_types()
            .iter()
            .map(|input| input.name.as_str())
            .collect();
        let mut declared = HashSet::new();
        let mut decls = Vec::new();

        for input in self.document.input_types() {
            let name = strip_unchecked(&input.name);
            if !self.is_selected(&name) {
                continue;
            }
            if name != input.name && all.contains(name.as_str()) {
                tracing::debug!(input = %input.name, "skipping unchecked input with a checked twin");
                continue;
            }
            if !declared.insert(name.clone()) {
                continue;
            }
            decls.push(self.lower(input, name));
        }

        decls
    }

    fn lower(&self, input: &InputObjectType, name: String) -> InputDecl {
        let model = self.owner(&name);
        let category = model.and_then(|m| {
            let rest = name.strip_prefix(m.name.as_str())?;
            InputCategory::ALL
                .into_iter()
                .find(|c| rest.starts_with(c.keyword()))
        });
        let excluded = match (category, model) {
            (Some(category), Some(model)) => self
                .config
                .inputs
                .exclude_input_fields
                .excluded(category, &model.name),
            _ => Vec::new(),
        };

        let mut fields = Vec::new();
        let mut dropped = Vec::new();
        for field in &input.fields {
            let nested = self.config.global.no_nested_input
                && NESTED_MUTATION_FIELDS.contains(&field.name.as_str());
            if nested
                || excluded.contains(&field.name.as_str())
                || omitted(model, &field.name, category)
            {
                dropped.push(field.name.clone());
                continue;
            }
            if let Some(decl) = self.lower_field(&name, field, model) {
                fields.push(decl);
            }
        }

        InputDecl {
            name,
            prisma_name: input.name.clone(),
            category,
            fields,
            dropped,
        }
    }

    fn lower_field(
        &self,
        input_name: &str,
        field: &InputField,
        model: Option<&Model>,
    ) -> Option<InputFieldDecl> {
        let main = main_input(field)?;

        let ty = match PothosTypeMapper::input_shorthand(&main.type_name) {
            Some(shorthand) if main.location == TypeLocation::Scalar => {
                if main.is_list {
                    InputFieldType::Shorthand(format!("{shorthand}List"))
                } else if self.maps_to_id(input_name, &field.name, model) {
                    InputFieldType::Shorthand("id".into())
                } else {
                    InputFieldType::Shorthand(shorthand.into())
                }
            }
            _ => InputFieldType::Field {
                type_name: PothosTypeMapper::input_type_name(&main.type_name),
                list: main.is_list,
            },
        };

        Some(InputFieldDecl {
            name: field.name.clone(),
            required: field.is_required,
            ty,
        })
    }

    /// `@id` fields of `{Model}WhereUniqueInput` under the `WhereUniqueInputs` mapping.
    fn maps_to_id(&self, input_name: &str, field_name: &str, model: Option<&Model>) -> bool {
        if self.config.inputs.map_id_fields_to_graphql_id != InputIdMapping::WhereUniqueInputs {
            return false;
        }
        model.is_some_and(|m| {
            input_name == format!("{}WhereUniqueInput", m.name)
                && m.field(field_name).is_some_and(|f| f.is_id)
        })
    }
}

/// Whether an `@Pothos.omit` marker on the model field hides it from this input.
fn omitted(model: Option<&Model>, field_name: &str, category: Option<InputCategory>) -> bool {
    let Some(field) = model.and_then(|m| m.field(field_name)) else {
        return false;
    };
    let omission = Documentation::parse(field.documentation.as_deref()).omission;
    match category {
        Some(category) => omission.omits_input(category),
        None => omission.omits_object(),
    }
}
