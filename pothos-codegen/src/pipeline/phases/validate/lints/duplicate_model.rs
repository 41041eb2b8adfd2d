//! Lint for duplicate model names.

use std::collections::HashMap;

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two models share a name.
///
/// Resolver names are `${operation}${model}`, so duplicates would collide.
/// Names that differ only by case get a warning: their output directories
/// collide on case-insensitive filesystems.
pub struct DuplicateModelLint;

impl Lint for DuplicateModelLint {
    fn name(&self) -> &'static str {
        "duplicate-model"
    }

    fn description(&self) -> &'static str {
        "Detect models whose generated names or directories would collide"
    }

    fn check(&self, document: &Document, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for model in document.models() {
            let normalized = model.name.to_lowercase();
            match seen.get(&normalized) {
                Some(first) if *first == model.name => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("duplicate model '{}'", model.name),
                    )
                    .at(format!("models.{}", model.name)),
                ),
                Some(first) => diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "model '{}' differs from '{}' only by case; their output directories collide on case-insensitive filesystems",
                            model.name, first
                        ),
                    )
                    .at(format!("models.{}", model.name)),
                ),
                None => {
                    seen.insert(normalized, &model.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::blog_document;

    use super::*;
    use crate::pipeline::Severity;

    fn renamed(names: &[&str]) -> Document {
        let mut document = blog_document();
        let template = document.datamodel.models[0].clone();
        document.datamodel.models = names
            .iter()
            .map(|name| {
                let mut model = template.clone();
                model.name = name.to_string();
                model
            })
            .collect();
        document
    }

    #[test]
    fn test_no_duplicates() {
        let mut diagnostics = Vec::new();
        DuplicateModelLint.check(&blog_document(), &Config::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_exact_duplicate_is_error() {
        let mut diagnostics = Vec::new();
        DuplicateModelLint.check(&renamed(&["User", "User"]), &Config::default(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].location.as_deref(), Some("models.User"));
    }

    #[test]
    fn test_case_only_difference_is_warning() {
        let mut diagnostics = Vec::new();
        DuplicateModelLint.check(&renamed(&["User", "user"]), &Config::default(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }
}
