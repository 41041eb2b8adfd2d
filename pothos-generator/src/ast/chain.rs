//! TypeScript method chain builder for fluent APIs.

/// A method call in a chain.
#[derive(Debug, Clone)]
struct Call {
    method: String,
    generics: Option<String>,
    args: Vec<String>,
}

impl Call {
    fn render(&self) -> String {
        let generics = self
            .generics
            .as_deref()
            .map(|g| format!("<{g}>"))
            .unwrap_or_default();
        format!("{}{generics}({})", self.method, self.args.join(", "))
    }
}

/// Builder for method chains (`builder.inputRef<T>('X').implement({...})`).
///
/// Arguments are rendered expressions and may span lines.
#[derive(Debug, Clone)]
pub struct MethodChain {
    receiver: String,
    calls: Vec<Call>,
}

impl MethodChain {
    /// Start a chain on an expression such as `builder`.
    pub fn new(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            calls: Vec::new(),
        }
    }

    /// Add a method call with one argument.
    pub fn call(self, method: impl Into<String>, arg: impl Into<String>) -> Self {
        self.call_args(method, vec![arg.into()])
    }

    /// Add a method call with multiple arguments.
    pub fn call_args(mut self, method: impl Into<String>, args: Vec<String>) -> Self {
        self.calls.push(Call {
            method: method.into(),
            generics: None,
            args,
        });
        self
    }

    /// Add a method call with explicit type arguments.
    pub fn call_generic(
        mut self,
        method: impl Into<String>,
        generics: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        self.calls.push(Call {
            method: method.into(),
            generics: Some(generics.into()),
            args,
        });
        self
    }

    /// Add a method call with no arguments.
    pub fn call_empty(self, method: impl Into<String>) -> Self {
        self.call_args(method, Vec::new())
    }

    /// Build the chain as one expression.
    pub fn build_inline(&self) -> String {
        let mut result = self.receiver.clone();
        for call in &self.calls {
            result.push('.');
            result.push_str(&call.render());
        }
        result
    }

    /// Build the chain with each call after the first on its own line.
    pub fn build(&self) -> String {
        let mut calls = self.calls.iter();
        let mut result = self.receiver.clone();
        if let Some(first) = calls.next() {
            result.push('.');
            result.push_str(&first.render());
        }
        for call in calls {
            result.push_str("\n  .");
            result.push_str(&call.render());
        }
        result
    }
}
