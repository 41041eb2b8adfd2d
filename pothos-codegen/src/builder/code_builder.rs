//! Indentation-aware text buffer for generated TypeScript.

use super::{CodeFragment, Indent, Renderable};

/// Builds code line by line at a tracked indentation level.
///
/// Consuming methods chain; `push_*` methods take `&mut self` for loops.
///
/// ```
/// use pothos_crud_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export const modelNames = [")
///     .indent()
///     .each(["User", "Post"], |b, name| b.line(&format!("'{name}',")))
///     .dedent()
///     .line("] as const;")
///     .build();
///
/// assert_eq!(code, "export const modelNames = [\n  'User',\n  'Post',\n] as const;\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line at the current level. Empty lines get no trailing spaces.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            for _ in 0..self.level {
                self.buffer.push_str(self.indent.as_str());
            }
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.level = self.level.saturating_sub(1);
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_line(&format!("/** {text} */"));
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Add every line of `text` at the current level.
    pub fn lines(mut self, text: &str) -> Self {
        for line in text.lines() {
            self.push_line(line);
        }
        self
    }

    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
