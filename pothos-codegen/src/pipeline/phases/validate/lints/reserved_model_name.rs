//! Lint for model names that shadow JavaScript globals or names bound by
//! generated files.

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Globals that generated files refer to.
const JS_GLOBALS: &[&str] = &[
    "Object", "Array", "String", "Number", "Boolean", "Date", "Promise", "Map", "Set", "Symbol",
    "Error", "JSON", "BigInt",
];

/// Module-scope names in `autocrud.ts`, next to one `import * as {Model}`
/// per model.
const GENERATED_BINDINGS: &[&str] = &[
    "Objects", "Model", "builder", "Inputs", "CrudOptions", "CrudDescriptor", "CrudTable",
    "ResolverType", "OperationMap", "FieldDefiner",
];

const TS_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
];

/// Lint that warns when `import * as {Model}` would shadow a global or
/// is not a legal binding.
pub struct ReservedModelNameLint;

impl Lint for ReservedModelNameLint {
    fn name(&self) -> &'static str {
        "reserved-model-name"
    }

    fn description(&self) -> &'static str {
        "Warn about model names that shadow JavaScript globals, generated bindings or TypeScript keywords"
    }

    fn check(&self, document: &Document, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for model in document.models() {
            let name = model.name.as_str();
            let message = if JS_GLOBALS.contains(&name) {
                format!("model '{}' shadows the JavaScript global '{}' in generated code", name, name)
            } else if GENERATED_BINDINGS.contains(&name) {
                format!("model '{}' collides with '{}' declared in generated autocrud.ts", name, name)
            } else if TS_RESERVED.contains(&name) {
                format!("model '{}' is a TypeScript reserved word", name)
            } else {
                continue;
            };
            diagnostics.push(Diagnostic::warning("validate", message).at(format!("models.{}", name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::user_document;

    use super::*;

    fn check_name(name: &str) -> Vec<Diagnostic> {
        let mut document = user_document();
        document.datamodel.models[0].name = name.to_string();
        let mut diagnostics = Vec::new();
        ReservedModelNameLint.check(&document, &Config::default(), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_regular_name() {
        assert!(check_name("User").is_empty());
    }

    #[test]
    fn test_global_name() {
        let diagnostics = check_name("Map");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("JavaScript global"));
    }

    #[test]
    fn test_reserved_word() {
        let diagnostics = check_name("class");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("reserved word"));
    }

    #[test]
    fn test_generated_binding_names() {
        for name in ["Model", "Objects", "builder", "CrudTable"] {
            let diagnostics = check_name(name);
            assert_eq!(diagnostics.len(), 1, "{name}");
            assert!(diagnostics[0].message.contains("generated autocrud.ts"));
            assert_eq!(diagnostics[0].location.as_deref(), Some(format!("models.{name}").as_str()));
        }
    }
}
