//! TypeScript function declaration builder.

use pothos_crud_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
    pub optional: bool,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            optional: false,
            default: None,
        }
    }

    /// A parameter whose type is inferred from its default value.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Default value expression (`table = createCrudTable()`).
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self) -> String {
        let mut out = self.name.clone();
        if self.optional {
            out.push('?');
        }
        if let Some(ty) = &self.ty {
            out.push_str(": ");
            out.push_str(ty);
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

/// Builder for TypeScript function declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    exported: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl AsRef<str>) -> Self {
        self.body
            .extend(content.as_ref().lines().map(str::to_string));
        self
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{export}function {}({params}): {ret} {{", self.name),
            None => format!("{export}function {}({params}) {{", self.name),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        let body = self
            .body
            .iter()
            .map(|line| CodeFragment::Line(line.clone()))
            .collect();

        fragments.push(CodeFragment::Block {
            header: self.signature(),
            body,
            close: Some("}".to_string()),
        });

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("generateAllCrud").build();
        assert_eq!(f, "export function generateAllCrud() {\n}\n");
    }

    #[test]
    fn test_fn_with_params_and_body() {
        let f = Fn::new("includeModel")
            .private()
            .param(Param::new("model", "Model"))
            .param(Param::new("opts", "CrudOptions").optional())
            .returns("boolean")
            .body("if (!opts) return true;\nreturn true;")
            .build();
        assert_eq!(
            f,
            "function includeModel(model: Model, opts?: CrudOptions): boolean {\n  if (!opts) return true;\n  return true;\n}\n"
        );
    }

    #[test]
    fn test_param_with_default() {
        let f = Fn::new("generateAllObjects")
            .param(Param::new("opts", "CrudOptions").optional())
            .param(Param::untyped("table").default("createCrudTable()"))
            .build();
        assert!(f.starts_with(
            "export function generateAllObjects(opts?: CrudOptions, table = createCrudTable()) {"
        ));
    }

    #[test]
    fn test_fn_with_doc() {
        let f = Fn::new("run").doc("Register everything").build();
        assert!(f.starts_with("/** Register everything */\n"));
    }
}
