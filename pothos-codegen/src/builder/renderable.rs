//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes lower themselves to fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into text.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    /// Header line, indented body, optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A one-line `/** ... */` comment.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Split multi-line text into one `Line` per line.
    ///
    /// Continuation lines pick up the builder's indentation, so a nested
    /// object literal rendered elsewhere keeps its shape.
    pub fn lines(text: &str) -> Vec<CodeFragment> {
        text.lines().map(CodeFragment::line).collect()
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_splits_text() {
        assert_eq!(
            CodeFragment::lines("a({\n  b,\n})"),
            vec![
                CodeFragment::line("a({"),
                CodeFragment::line("  b,"),
                CodeFragment::line("})"),
            ]
        );
    }
}
