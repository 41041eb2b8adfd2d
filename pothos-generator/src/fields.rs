//! Object field declarations and `@Pothos.omit` documentation markers.

use pothos_crud_config::{CrudConfig, InputCategory, ObjectIdMapping};
use pothos_crud_schema::Field;

use crate::ast::{JsArray, JsObject};

const OMIT_MARKER: &str = "@Pothos.omit(";

/// Where a field is left out because of an `@Pothos.omit(...)` marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Omission {
    #[default]
    Nowhere,
    /// `@Pothos.omit()`: dropped from the object type and every input.
    Everywhere,
    /// `@Pothos.omit(create, update)`: dropped from those input categories.
    Inputs(Vec<InputCategory>),
}

impl Omission {
    pub fn omits_object(&self) -> bool {
        matches!(self, Omission::Everywhere)
    }

    pub fn omits_input(&self, category: InputCategory) -> bool {
        match self {
            Omission::Nowhere => false,
            Omission::Everywhere => true,
            Omission::Inputs(categories) => categories.contains(&category),
        }
    }
}

/// A documentation comment split into display text and omission markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    /// Text with markers removed and trimmed; `None` when nothing is left.
    pub description: Option<String>,
    pub omission: Omission,
}

impl Documentation {
    pub fn parse(doc: Option<&str>) -> Self {
        let Some(doc) = doc else {
            return Self::default();
        };

        let mut text = String::new();
        let mut omission = Omission::Nowhere;
        let mut rest = doc;

        while let Some(start) = rest.find(OMIT_MARKER) {
            text.push_str(&rest[..start]);
            let after = &rest[start + OMIT_MARKER.len()..];
            let Some(end) = after.find(')') else {
                // Unterminated marker: keep it as plain text.
                text.push_str(&rest[start..]);
                rest = "";
                break;
            };

            omission = merge(omission, parse_omit_args(&after[..end]));
            rest = &after[end + 1..];
        }
        text.push_str(rest);

        let text = text.trim();
        Self {
            description: (!text.is_empty()).then(|| text.to_string()),
            omission,
        }
    }
}

fn parse_omit_args(args: &str) -> Omission {
    let names: Vec<&str> = args
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() {
        return Omission::Everywhere;
    }
    Omission::Inputs(names.into_iter().filter_map(InputCategory::parse).collect())
}

fn merge(current: Omission, next: Omission) -> Omission {
    match (current, next) {
        (Omission::Everywhere, _) | (_, Omission::Everywhere) => Omission::Everywhere,
        (Omission::Nowhere, other) | (other, Omission::Nowhere) => other,
        (Omission::Inputs(mut a), Omission::Inputs(b)) => {
            for c in b {
                if !a.contains(&c) {
                    a.push(c);
                }
            }
            Omission::Inputs(a)
        }
    }
}

/// Renders model fields as Pothos object field declarations.
pub struct FieldRenderer<'a> {
    config: &'a CrudConfig,
}

impl<'a> FieldRenderer<'a> {
    pub fn new(config: &'a CrudConfig) -> Self {
        Self { config }
    }

    /// One `name: t.expose(...)` / `name: t.relation(...)` line, or `None`
    /// when the field is omitted from the object type.
    pub fn render(&self, field: &Field) -> Option<String> {
        let doc = Documentation::parse(field.documentation.as_deref());
        if doc.omission.omits_object() {
            return None;
        }

        let nullable = !field.is_required;
        let options = JsObject::new().template_opt("description", doc.description);

        let line = if field.is_relation() {
            let options = options.bool("nullable", nullable);
            format!(
                "{0}: t.relation(\"{0}\", {1}),",
                field.name,
                options.build_inline()
            )
        } else {
            let type_name = self.exposed_type(field);
            let options = if field.is_list {
                options.array("type", JsArray::new().string(type_name))
            } else {
                options.string("type", type_name)
            };
            let options = options.bool("nullable", nullable);
            format!(
                "{0}: t.expose(\"{0}\", {1}),",
                field.name,
                options.build_inline()
            )
        };
        Some(line)
    }

    fn exposed_type<'f>(&self, field: &'f Field) -> &'f str {
        if field.is_id && self.config.map_id_fields_to_graphql_id == ObjectIdMapping::Objects {
            "ID"
        } else {
            &field.field_type
        }
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::blog_document;

    use super::*;

    #[test]
    fn test_documentation_without_markers() {
        let doc = Documentation::parse(Some("  A registered author \n"));
        assert_eq!(doc.description.as_deref(), Some("A registered author"));
        assert_eq!(doc.omission, Omission::Nowhere);
        assert_eq!(Documentation::parse(None), Documentation::default());
    }

    #[test]
    fn test_omit_everywhere() {
        let doc = Documentation::parse(Some("@Pothos.omit()"));
        assert_eq!(doc.description, None);
        assert!(doc.omission.omits_object());
        assert!(doc.omission.omits_input(InputCategory::Where));
    }

    #[test]
    fn test_omit_categories_and_keep_text() {
        let doc = Documentation::parse(Some("@Pothos.omit(create, update) Creation time"));
        assert_eq!(doc.description.as_deref(), Some("Creation time"));
        assert!(!doc.omission.omits_object());
        assert!(doc.omission.omits_input(InputCategory::Create));
        assert!(doc.omission.omits_input(InputCategory::Update));
        assert!(!doc.omission.omits_input(InputCategory::Where));
    }

    #[test]
    fn test_unknown_categories_are_ignored() {
        let doc = Documentation::parse(Some("@Pothos.omit(nonsense, orderBy)"));
        assert_eq!(doc.omission, Omission::Inputs(vec![InputCategory::OrderBy]));
    }

    #[test]
    fn test_multiple_markers_merge() {
        let doc = Documentation::parse(Some("@Pothos.omit(create) text @Pothos.omit(where)"));
        assert_eq!(doc.description.as_deref(), Some("text"));
        assert_eq!(
            doc.omission,
            Omission::Inputs(vec![InputCategory::Create, InputCategory::Where])
        );
    }

    #[test]
    fn test_unterminated_marker_is_text() {
        let doc = Documentation::parse(Some("@Pothos.omit(create"));
        assert_eq!(doc.description.as_deref(), Some("@Pothos.omit(create"));
        assert_eq!(doc.omission, Omission::Nowhere);
    }

    #[test]
    fn test_render_scalar_relation_and_enum() {
        let document = blog_document();
        let config = CrudConfig::default();
        let renderer = FieldRenderer::new(&config);
        let user = document.model("User").unwrap();
        let post = document.model("Post").unwrap();

        assert_eq!(
            renderer.render(user.field("id").unwrap()).unwrap(),
            "id: t.expose(\"id\", { type: \"Int\", nullable: false }),"
        );
        assert_eq!(
            renderer.render(user.field("role").unwrap()).unwrap(),
            "role: t.expose(\"role\", { type: \"Role\", nullable: false }),"
        );
        assert_eq!(
            renderer.render(user.field("posts").unwrap()).unwrap(),
            "posts: t.relation(\"posts\", { nullable: false }),"
        );
        assert_eq!(
            renderer.render(post.field("author").unwrap()).unwrap(),
            "author: t.relation(\"author\", { nullable: true }),"
        );
        assert_eq!(
            renderer.render(post.field("createdAt").unwrap()).unwrap(),
            "createdAt: t.expose(\"createdAt\", { description: `Creation time`, type: \"DateTime\", nullable: false }),"
        );
    }

    #[test]
    fn test_render_omitted_field() {
        let document = blog_document();
        let config = CrudConfig::default();
        let password = document.model("User").unwrap().field("password").unwrap();
        assert_eq!(FieldRenderer::new(&config).render(password), None);
    }

    #[test]
    fn test_render_maps_id_to_graphql_id() {
        let document = blog_document();
        let config = CrudConfig {
            map_id_fields_to_graphql_id: ObjectIdMapping::Objects,
            ..CrudConfig::default()
        };
        let id = document.model("User").unwrap().field("id").unwrap();
        assert_eq!(
            FieldRenderer::new(&config).render(id).unwrap(),
            "id: t.expose(\"id\", { type: \"ID\", nullable: false }),"
        );
    }

    #[test]
    fn test_render_scalar_list() {
        let config = CrudConfig::default();
        let field: Field = serde_json::from_str(
            r#"{ "name": "tags", "kind": "scalar", "type": "String", "isRequired": true, "isList": true }"#,
        )
        .unwrap();
        assert_eq!(
            FieldRenderer::new(&config).render(&field).unwrap(),
            "tags: t.expose(\"tags\", { type: [\"String\"], nullable: false }),"
        );
    }
}
