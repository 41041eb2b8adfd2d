//! `objects.ts`: the shared `BatchPayload` object and the model name list.

use std::path::{Path, PathBuf};

use pothos_crud_config::Config;
use pothos_crud_core::GeneratedFile;

use crate::{
    ast::{ArrowFn, Const, Import, JsArray, JsObject, MethodChain, single_quote},
    code_file::{CodeFile, RawCode},
};

pub struct ObjectsTs<'a> {
    model_names: Vec<&'a str>,
    config: &'a Config,
}

impl<'a> ObjectsTs<'a> {
    pub fn new(model_names: Vec<&'a str>, config: &'a Config) -> Self {
        Self {
            model_names,
            config,
        }
    }

    fn batch_payload(&self) -> Const {
        let count = JsObject::new()
            .string("description", "Prisma Batch Payload")
            .bool("nullable", false);
        let fields = JsObject::new().raw(
            "count",
            format!("t.exposeInt(\"count\", {})", count.build_inline()),
        );
        let options = JsObject::new()
            .string("description", "Batch payloads from prisma.")
            .arrow_fn("fields", ArrowFn::new("t").returns_object(fields));

        let object_ref = MethodChain::new("builder")
            .call_generic(
                "objectRef",
                "Prisma.BatchPayload",
                vec![single_quote("BatchPayload")],
            )
            .build_inline();

        Const::new(
            "BatchPayload",
            MethodChain::new("builder")
                .call_args("objectType", vec![object_ref, options.build()])
                .build_inline(),
        )
    }
}

impl GeneratedFile for ObjectsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("objects.ts")
    }

    fn render(&self) -> String {
        let names = JsArray::from_strings(self.model_names.iter().copied()).as_const();

        CodeFile::new()
            .verbatim_import(&self.config.crud.prisma_importer)
            .import(Import::new(&self.config.global.builder_import_path).named("builder"))
            .add(self.batch_payload())
            .add(Const::new("modelNames", names.build_multiline()))
            .add(RawCode::new("export type Model = (typeof modelNames)[number];"))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_file() {
        let config = Config::default();
        let file = ObjectsTs::new(vec!["User", "Post"], &config);

        assert_eq!(file.path(Path::new("out")), PathBuf::from("out/objects.ts"));
        insta::assert_snapshot!(file.render(), @r#"
        import { Prisma } from '.prisma/client';
        import { builder } from './builder';

        export const BatchPayload = builder.objectType(builder.objectRef<Prisma.BatchPayload>('BatchPayload'), {
          description: "Batch payloads from prisma.",
          fields: (t) => ({
            count: t.exposeInt("count", { description: "Prisma Batch Payload", nullable: false }),
          }),
        });

        export const modelNames = [
          "User",
          "Post",
        ] as const;

        export type Model = (typeof modelNames)[number];
        "#);
    }
}
