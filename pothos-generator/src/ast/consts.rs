//! TypeScript const declaration builder.

use pothos_crud_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript const declarations.
///
/// The value is an already rendered expression. Multi-line values keep
/// their own indentation; the terminating `;` goes on the last line.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn head(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        match &self.ty {
            Some(ty) => format!("{export}const {}: {ty} = ", self.name),
            None => format!("{export}const {} = ", self.name),
        }
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let value = self.value.trim_end();
        let mut lines: Vec<String> = value.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        let last = lines.len() - 1;
        lines[0] = format!("{}{}", self.head(), lines[0]);
        lines[last].push(';');
        lines.into_iter().map(CodeFragment::Line).collect()
    }
}
