//! TypeScript object literal and arrow function builders.

use pothos_crud_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{
    arrays::JsArray,
    literal::{property_key, quote, template},
};

/// A member of an object literal.
#[derive(Debug, Clone)]
enum Member {
    Property { key: String, value: PropertyValue },
    /// `...expr`
    Spread(String),
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A string literal (double-quoted and escaped).
    String(String),
    /// A template literal (backtick-quoted and escaped).
    Template(String),
    /// A rendered expression, possibly spanning several lines.
    Raw(String),
    Object(JsObject),
    ArrowFn(ArrowFn),
    Array(JsArray),
}

impl PropertyValue {
    fn inline(&self) -> String {
        match self {
            PropertyValue::String(s) => quote(s),
            PropertyValue::Template(s) => template(s),
            PropertyValue::Raw(s) => s.clone(),
            PropertyValue::Object(obj) => obj.build_inline(),
            PropertyValue::ArrowFn(func) => func.build(),
            PropertyValue::Array(arr) => arr.build(),
        }
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    members: Vec<Member>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    fn property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.members.push(Member::Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(key, PropertyValue::String(value.into()))
    }

    /// Add a property with a template literal value.
    pub fn template(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(key, PropertyValue::Template(value.into()))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(key, PropertyValue::Raw(value.into()))
    }

    /// Add a property with a nested object value.
    pub fn object(self, key: impl Into<String>, value: JsObject) -> Self {
        self.property(key, PropertyValue::Object(value))
    }

    /// Add an arrow function property.
    pub fn arrow_fn(self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.property(key, PropertyValue::ArrowFn(value))
    }

    /// Add an array property.
    pub fn array(self, key: impl Into<String>, value: JsArray) -> Self {
        self.property(key, PropertyValue::Array(value))
    }

    /// Add a boolean property.
    pub fn bool(self, key: impl Into<String>, value: bool) -> Self {
        self.raw(key, value.to_string())
    }

    /// Spread another object into this one (`...query`).
    pub fn spread(mut self, expr: impl Into<String>) -> Self {
        self.members.push(Member::Spread(expr.into()));
        self
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.raw(name.clone(), name)
    }

    /// Conditionally add a template literal property using an Option.
    pub fn template_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.template(key, v),
            None => self,
        }
    }

    /// Conditionally add a raw property.
    pub fn raw_if(self, condition: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.raw(key, value)
        } else {
            self
        }
    }

    /// Conditionally add a raw property using an Option.
    pub fn raw_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.raw(key, v),
            None => self,
        }
    }

    /// Conditionally add a spread member.
    pub fn spread_if(self, condition: bool, expr: impl Into<String>) -> Self {
        if condition { self.spread(expr) } else { self }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Render on one line: `{ a: 1, b: "x" }`.
    pub fn build_inline(&self) -> String {
        if self.members.is_empty() {
            return "{}".to_string();
        }

        let members = self
            .members
            .iter()
            .map(|m| match m {
                Member::Property { key, value } if is_shorthand(key, value) => key.clone(),
                Member::Property { key, value } => {
                    format!("{}: {}", property_key(key), value.inline())
                }
                Member::Spread(expr) => format!("...{expr}"),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {members} }}")
    }

    /// Render across several lines, one member per line.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build().trim_end_matches('\n').to_string()
    }

    fn member_fragments(&self) -> Vec<CodeFragment> {
        self.members
            .iter()
            .flat_map(|member| match member {
                Member::Spread(expr) => vec![CodeFragment::Line(format!("...{expr},"))],
                Member::Property { key, value } if is_shorthand(key, value) => {
                    vec![CodeFragment::Line(format!("{key},"))]
                }
                Member::Property { key, value } => {
                    let key = property_key(key);
                    match value {
                        PropertyValue::Object(obj) if !obj.is_empty() => {
                            vec![CodeFragment::Block {
                                header: format!("{key}: {{"),
                                body: obj.member_fragments(),
                                close: Some("},".to_string()),
                            }]
                        }
                        PropertyValue::Object(_) => vec![CodeFragment::Line(format!("{key}: {{}},"))],
                        PropertyValue::ArrowFn(func) => expression_lines(&key, &func.build()),
                        PropertyValue::Raw(s) => expression_lines(&key, s),
                        other => vec![CodeFragment::Line(format!("{key}: {},", other.inline()))],
                    }
                }
            })
            .collect()
    }
}

fn is_shorthand(key: &str, value: &PropertyValue) -> bool {
    matches!(value, PropertyValue::Raw(v) if v == key) && pothos_crud_core::is_js_identifier(key)
}

/// `key: expr,` where `expr` may span lines. Continuation lines keep their
/// own relative indentation.
fn expression_lines(key: &str, expr: &str) -> Vec<CodeFragment> {
    let mut lines: Vec<String> = expr.trim_end().lines().map(str::to_string).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    let last = lines.len() - 1;
    lines[0] = format!("{key}: {}", lines[0]);
    lines[last].push(',');
    lines.into_iter().map(CodeFragment::Line).collect()
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::Line("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.member_fragments(),
            close: Some("}".to_string()),
        }]
    }
}

#[derive(Debug, Clone)]
enum ArrowBody {
    Block(Vec<String>),
    /// `=> expr`
    Expr(String),
    /// `=>` then the expression indented on the following lines.
    ExprBelow(String),
    /// `=> ({ ... })`
    Object(JsObject),
}

/// An arrow function expression.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    params: String,
    is_async: bool,
    body: ArrowBody,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            is_async: false,
            body: ArrowBody::Block(Vec::new()),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Add a statement to a block body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        match &mut self.body {
            ArrowBody::Block(lines) => lines.push(line.into()),
            _ => self.body = ArrowBody::Block(vec![line.into()]),
        }
        self
    }

    /// Return an expression directly.
    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.body = ArrowBody::Expr(expr.into());
        self
    }

    /// Return an expression placed on the lines after the arrow.
    pub fn expr_below(mut self, expr: impl Into<String>) -> Self {
        self.body = ArrowBody::ExprBelow(expr.into());
        self
    }

    /// Return an object literal (`=> ({ ... })`).
    pub fn returns_object(mut self, obj: JsObject) -> Self {
        self.body = ArrowBody::Object(obj);
        self
    }

    /// Render the function as an expression.
    pub fn build(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        let head = format!("{async_kw}({}) =>", self.params);

        match &self.body {
            ArrowBody::Expr(expr) => format!("{head} {expr}"),
            ArrowBody::ExprBelow(expr) => {
                let mut builder = CodeBuilder::typescript().line(&head).indent();
                for line in expr.lines() {
                    builder = builder.line(line);
                }
                builder.build().trim_end_matches('\n').to_string()
            }
            ArrowBody::Object(obj) if obj.is_empty() => format!("{head} ({{}})"),
            ArrowBody::Object(obj) => format!("{head} ({})", obj.build()),
            ArrowBody::Block(lines) if lines.is_empty() => format!("{head} {{}}"),
            ArrowBody::Block(lines) => CodeBuilder::typescript()
                .line(&format!("{head} {{"))
                .indent()
                .each(lines, |b, line| b.line(line))
                .dedent()
                .line("}")
                .build()
                .trim_end_matches('\n')
                .to_string(),
        }
    }
}
