//! Serde model of the Prisma DMMF document.
//!
//! Only the parts the generator reads are modelled; unknown keys are ignored
//! so documents from newer Prisma versions still load.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result};

/// Root of a DMMF document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub datamodel: Datamodel,
    pub schema: InputSchema,
}

impl Document {
    /// Parse a DMMF JSON file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a DMMF JSON string with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Models in schema order.
    pub fn models(&self) -> &[Model] {
        &self.datamodel.models
    }

    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.datamodel.models.iter().find(|m| m.name == name)
    }

    /// Input object types Prisma generates for the client.
    pub fn input_types(&self) -> &[InputObjectType] {
        &self.schema.input_object_types.prisma
    }

    /// Look up a client input type by its exact name.
    pub fn input_type(&self, name: &str) -> Option<&InputObjectType> {
        self.input_types().iter().find(|i| i.name == name)
    }

    /// Every enum the inputs file declares: Prisma built-ins first, then
    /// datamodel enums, each as `(name, values)`.
    pub fn enums(&self) -> Vec<(&str, Vec<&str>)> {
        let builtin = self
            .schema
            .enum_types
            .prisma
            .iter()
            .map(|e| (e.name.as_str(), e.values.iter().map(String::as_str).collect()));
        let declared = self
            .datamodel
            .enums
            .iter()
            .map(|e| (e.name.as_str(), e.values.iter().map(|v| v.name.as_str()).collect()));
        builtin.chain(declared).collect()
    }
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "dmmf.json")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Datamodel {
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<DatamodelEnum>,
}

/// A model from the datamodel, e.g. `User`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
    #[serde(default)]
    pub primary_key: Option<PrimaryKey>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Model {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Composite primary key (`@@id([a, b])`).
#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryKey {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

/// A model field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub relation_name: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Field {
    /// Relation fields point at another model.
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some() || self.kind == FieldKind::Object
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatamodelEnum {
    pub name: String,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumValue {
    pub name: String,
}

/// The `schema` section: generated client input shapes and enums.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    pub input_object_types: Namespaced<InputObjectType>,
    #[serde(default)]
    pub enum_types: Namespaced<SchemaEnum>,
}

/// Prisma splits generated types into `prisma` (client) and `model` namespaces.
#[derive(Debug, Clone, Deserialize)]
pub struct Namespaced<T> {
    #[serde(default = "Vec::new")]
    pub prisma: Vec<T>,
    #[serde(default = "Vec::new")]
    pub model: Vec<T>,
}

impl<T> Default for Namespaced<T> {
    fn default() -> Self {
        Self {
            prisma: Vec::new(),
            model: Vec::new(),
        }
    }
}

/// An input object shape, e.g. `UserWhereInput`.
#[derive(Debug, Clone, Deserialize)]
pub struct InputObjectType {
    pub name: String,
    pub fields: Vec<InputField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    pub input_types: Vec<InputTypeRef>,
}

/// One accepted type of an input field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTypeRef {
    #[serde(rename = "type")]
    pub type_name: String,
    pub location: TypeLocation,
    #[serde(default)]
    pub is_list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeLocation {
    Scalar,
    InputObjectTypes,
    EnumTypes,
    OutputObjectTypes,
    FieldRefTypes,
}

/// A generated enum, e.g. `SortOrder` or `UserScalarFieldEnum`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaEnum {
    pub name: String,
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "datamodel": {
            "models": [
                {
                    "name": "User",
                    "dbName": null,
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true, "isList": false, "isId": true },
                        { "name": "posts", "kind": "object", "type": "Post", "relationName": "PostToUser", "isRequired": true, "isList": true, "isId": false }
                    ],
                    "primaryKey": null
                }
            ],
            "enums": [{ "name": "Role", "values": [{ "name": "USER" }, { "name": "ADMIN" }] }]
        },
        "schema": {
            "inputObjectTypes": {
                "prisma": [
                    {
                        "name": "UserWhereUniqueInput",
                        "fields": [
                            { "name": "id", "isRequired": false, "inputTypes": [{ "type": "Int", "location": "scalar", "isList": false }] }
                        ]
                    }
                ]
            },
            "enumTypes": { "prisma": [{ "name": "SortOrder", "values": ["asc", "desc"] }] }
        }
    }"#;

    #[test]
    fn test_parse_minimal_document() {
        let doc: Document = MINIMAL.parse().unwrap();

        assert_eq!(doc.models().len(), 1);
        let user = doc.model("User").unwrap();
        assert!(user.field("id").unwrap().is_id);
        assert!(user.field("posts").unwrap().is_relation());
        assert!(!user.field("id").unwrap().is_relation());
        assert!(doc.input_type("UserWhereUniqueInput").is_some());
    }

    #[test]
    fn test_enums_builtin_first() {
        let doc: Document = MINIMAL.parse().unwrap();
        let enums = doc.enums();

        assert_eq!(enums[0], ("SortOrder", vec!["asc", "desc"]));
        assert_eq!(enums[1], ("Role", vec!["USER", "ADMIN"]));
    }

    #[test]
    fn test_missing_enum_types_defaults_to_empty() {
        let doc: Document = r#"{
            "datamodel": { "models": [] },
            "schema": { "inputObjectTypes": { "prisma": [] } }
        }"#
        .parse()
        .unwrap();

        assert!(doc.enums().is_empty());
    }

    #[test]
    fn test_parse_error_is_reported_with_filename() {
        let err = Document::from_str_with_filename("{ \"datamodel\": ", "broken.json").unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
        assert_eq!(err.to_string(), "failed to parse schema description");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Document::from_file("/definitely/not/here/dmmf.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
