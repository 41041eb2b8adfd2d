//! TypeScript export builder.

use pothos_crud_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::literal::single_quote;

/// Builder for TypeScript re-export statements.
#[derive(Debug, Clone)]
pub struct Export {
    from: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn new() -> Self {
        Self {
            from: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> Option<String> {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.from, self.named.is_empty()) {
            (Some(from), true) => Some(format!("export * from {};", single_quote(from))),
            (Some(from), false) => Some(format!(
                "export {type_kw}{{ {} }} from {};",
                self.named.join(", "),
                single_quote(from)
            )),
            (None, false) => Some(format!("export {type_kw}{{ {} }};", self.named.join(", "))),
            (None, true) => None,
        }
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        match self.statement() {
            Some(s) => CodeBuilder::typescript().line(&s).build(),
            None => String::new(),
        }
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.statement().map(CodeFragment::line).into_iter().collect()
    }
}
