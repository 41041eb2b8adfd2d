//! TypeScript/JavaScript array literal builder.

use super::literal::quote;

/// An element in a JavaScript array literal.
#[derive(Debug, Clone)]
pub enum ArrayElement {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
}

impl ArrayElement {
    fn render(&self) -> String {
        match self {
            ArrayElement::String(s) => quote(s),
            ArrayElement::Raw(s) => s.clone(),
        }
    }
}

/// Builder for JavaScript/TypeScript array literals.
///
/// Supports the `as const` TypeScript assertion for literal types.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<ArrayElement>,
    as_const: bool,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array from string values (will be quoted).
    pub fn from_strings<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter
                .into_iter()
                .map(|s| ArrayElement::String(s.into()))
                .collect(),
            as_const: false,
        }
    }

    /// Add a string element (will be quoted).
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::String(value.into()));
        self
    }

    /// Add a raw expression element (will not be quoted).
    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::Raw(value.into()));
        self
    }

    /// Add the `as const` TypeScript assertion.
    pub fn as_const(mut self) -> Self {
        self.as_const = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn suffix(&self) -> &'static str {
        if self.as_const { " as const" } else { "" }
    }

    /// Build the array literal on one line.
    pub fn build(&self) -> String {
        let elements = self
            .elements
            .iter()
            .map(ArrayElement::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{elements}]{}", self.suffix())
    }

    /// Build the array literal with one element per line.
    pub fn build_multiline(&self) -> String {
        if self.elements.is_empty() {
            return format!("[]{}", self.suffix());
        }

        let mut out = String::from("[\n");
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(&element.render());
            out.push_str(",\n");
        }
        out.push(']');
        out.push_str(self.suffix());
        out
    }
}
