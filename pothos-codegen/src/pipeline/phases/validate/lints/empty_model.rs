//! Lint for models without fields.

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns on models with no fields.
pub struct EmptyModelLint;

impl Lint for EmptyModelLint {
    fn name(&self) -> &'static str {
        "empty-model"
    }

    fn description(&self) -> &'static str {
        "Warn about models that would generate an object type without fields"
    }

    fn check(&self, document: &Document, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for model in document.models().iter().filter(|m| m.fields.is_empty()) {
            diagnostics.push(
                Diagnostic::warning("validate", format!("model '{}' has no fields", model.name))
                    .at(format!("models.{}", model.name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::user_document;

    use super::*;

    #[test]
    fn test_model_with_fields() {
        let mut diagnostics = Vec::new();
        EmptyModelLint.check(&user_document(), &Config::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_model_without_fields() {
        let mut document = user_document();
        document.datamodel.models[0].fields.clear();

        let mut diagnostics = Vec::new();
        EmptyModelLint.check(&document, &Config::default(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "model 'User' has no fields");
    }
}
