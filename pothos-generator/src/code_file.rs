//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! organized imports, body content, and exports sections.

use pothos_crud_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// One entry of the imports section.
#[derive(Debug, Clone)]
enum ImportLine {
    Built(Import),
    /// User-supplied import text, spliced verbatim.
    Verbatim(String),
}

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: imports, body, and exports.
/// Body elements are separated by a blank line.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("../utils").named("definePrismaObject"))
///     .add(Const::new("UserObject", object.build()))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<ImportLine>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(ImportLine::Built(import));
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports
            .extend(imports.into_iter().map(ImportLine::Built));
        self
    }

    /// Splice configured import text (one or more lines). Blank text is ignored.
    pub fn verbatim_import(mut self, text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() {
            self.imports.push(ImportLine::Verbatim(text.to_string()));
        }
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            match import {
                ImportLine::Built(import) => {
                    builder.emit(import);
                }
                ImportLine::Verbatim(text) => {
                    for line in text.lines() {
                        builder.push_line(line.trim_end());
                    }
                }
            }
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        CodeFragment::lines(&self.0)
    }
}
