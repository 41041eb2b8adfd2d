//! TypeScript import builder.

use pothos_crud_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::literal::single_quote;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    namespace: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            namespace: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import the whole module under a name (`import * as Inputs`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let from = single_quote(&self.from);

        match (&self.namespace, self.named.is_empty()) {
            (Some(ns), _) => format!("import {type_kw}* as {ns} from {from};"),
            (None, false) => format!(
                "import {type_kw}{{ {} }} from {from};",
                self.named.join(", ")
            ),
            (None, true) => format!("import {from};"),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().line(&self.statement()).build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
