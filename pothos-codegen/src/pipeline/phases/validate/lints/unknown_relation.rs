//! Lint for relation fields pointing at missing models.

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a relation field's type names no model.
pub struct UnknownRelationLint;

impl Lint for UnknownRelationLint {
    fn name(&self) -> &'static str {
        "unknown-relation"
    }

    fn description(&self) -> &'static str {
        "Detect relation fields whose target model does not exist"
    }

    fn check(&self, document: &Document, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for model in document.models() {
            for field in model.fields.iter().filter(|f| f.is_relation()) {
                if document.model(&field.field_type).is_none() {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "relation '{}.{}' points at unknown model '{}'",
                                model.name, field.name, field.field_type
                            ),
                        )
                        .at(format!("models.{}.{}", model.name, field.name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::blog_document;

    use super::*;

    #[test]
    fn test_known_relations() {
        let mut diagnostics = Vec::new();
        UnknownRelationLint.check(&blog_document(), &Config::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_dangling_relation() {
        let mut document = blog_document();
        document.datamodel.models.retain(|m| m.name != "User");

        let mut diagnostics = Vec::new();
        UnknownRelationLint.check(&document, &Config::default(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "relation 'Post.author' points at unknown model 'User'"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("models.Post.author"));
    }
}
