//! `{Model}/object.base.ts` generator.

use std::path::{Path, PathBuf};

use pothos_crud_config::CrudConfig;
use pothos_crud_core::GeneratedFile;
use pothos_crud_schema::Model;

use crate::{
    ast::{ArrowFn, Const, Import, JsObject, single_quote},
    code_file::CodeFile,
    fields::{Documentation, FieldRenderer},
};

/// The Pothos object definition of one model.
pub struct ObjectTs<'a> {
    model: &'a Model,
    config: &'a CrudConfig,
}

impl<'a> ObjectTs<'a> {
    pub fn new(model: &'a Model, config: &'a CrudConfig) -> Self {
        Self { model, config }
    }

    fn fields_expr(&self) -> String {
        let renderer = FieldRenderer::new(self.config);
        let lines: Vec<String> = self
            .model
            .fields
            .iter()
            .filter_map(|field| renderer.render(field))
            .map(|line| format!("  {line}"))
            .collect();

        if lines.is_empty() {
            "({})".to_string()
        } else {
            format!("({{\n{}\n}})", lines.join("\n"))
        }
    }
}

impl GeneratedFile for ObjectTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.model.name).join("object.base.ts")
    }

    fn render(&self) -> String {
        let name = &self.model.name;
        let doc = Documentation::parse(self.model.documentation.as_deref());

        let options = JsObject::new()
            .template_opt("description", doc.description)
            .arrow_fn("fields", ArrowFn::new("t").expr(self.fields_expr()));

        let definition = format!(
            "definePrismaObject({}, {})",
            single_quote(name),
            options.build()
        );

        CodeFile::new()
            .import(Import::new("../utils").named("definePrismaObject"))
            .add(Const::new(format!("{name}Object"), definition))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::{blog_document, user_document};

    use super::*;

    #[test]
    fn test_user_object() {
        let document = user_document();
        let config = CrudConfig::default();
        let file = ObjectTs::new(document.model("User").unwrap(), &config);

        assert_eq!(file.path(Path::new("out")), PathBuf::from("out/User/object.base.ts"));
        insta::assert_snapshot!(file.render(), @r#"
        import { definePrismaObject } from '../utils';

        export const UserObject = definePrismaObject('User', {
          fields: (t) => ({
            id: t.expose("id", { type: "Int", nullable: false }),
            name: t.expose("name", { type: "String", nullable: false }),
          }),
        });
        "#);
    }

    #[test]
    fn test_documented_model_with_omitted_field() {
        let document = blog_document();
        let config = CrudConfig::default();
        let content = ObjectTs::new(document.model("User").unwrap(), &config).render();

        assert!(content.contains("  description: `A registered author`,\n"));
        assert!(!content.contains("password"));
        assert!(content.contains("    posts: t.relation(\"posts\", { nullable: false }),\n"));
    }
}
