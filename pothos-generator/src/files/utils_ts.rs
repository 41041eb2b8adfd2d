//! `utils.ts`: type helpers the generated objects and resolvers are written against.

use std::path::{Path, PathBuf};

use pothos_crud_core::GeneratedFile;

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

const POTHOS_CORE_IMPORTS: [&str; 6] = [
    "FieldKind",
    "FieldOptionsFromKind",
    "InputFieldMap",
    "InterfaceParam",
    "ObjectRef",
    "TypeParam",
];

const POTHOS_PRISMA_IMPORTS: [&str; 4] = [
    "PrismaFieldOptions",
    "PrismaModelTypes",
    "PrismaObjectTypeOptions",
    "RelatedFieldOptions",
];

const TYPES: &str = "type Types = typeof builder extends PothosSchemaTypes.SchemaBuilder<infer T> ? T : unknown;";

const OBJECT_HELPERS: &str = r#"export const defineFieldObject = <
  Name extends keyof Types['PrismaTypes'],
  Type extends TypeParam<Types>,
  Nullable extends boolean,
  Args extends InputFieldMap,
>(
  _: Name,
  obj: FieldOptionsFromKind<
    Types,
    Types['PrismaTypes'][Name]['Shape'],
    Type,
    Nullable,
    Args,
    'Object',
    unknown,
    unknown
  >,
) => obj as { type: Type; nullable: Nullable; description?: string; resolve: (typeof obj)['resolve'] };

export const defineRelationObject = <
  ModelName extends keyof Types['PrismaTypes'],
  RelationName extends keyof Types['PrismaTypes'][ModelName]['Relations'],
  Nullable extends boolean,
  Args extends InputFieldMap,
>(
  _: ModelName,
  __: RelationName,
  obj: RelatedFieldOptions<
    Types,
    Types['PrismaTypes'][ModelName],
    RelationName,
    Nullable,
    Args,
    unknown,
    Types['PrismaTypes'][ModelName]['Shape']
  >,
) =>
  obj as {
    description: string | undefined;
    nullable: Nullable;
    args: Args;
    query: (typeof obj)['query'];
  };

export const defineRelationFunction = <ModelName extends keyof Types['PrismaTypes'], O>(
  _: ModelName,
  func: (
    t: PothosSchemaTypes.PrismaObjectFieldBuilder<
      Types,
      Types['PrismaTypes'][ModelName],
      Types['PrismaTypes'][ModelName]['Shape']
    >,
  ) => O,
) => func;

export const definePrismaObject = <
  Name extends keyof Types['PrismaTypes'],
  Obj extends PrismaObjectTypeOptions<
    Types,
    Types['PrismaTypes'][Name],
    InterfaceParam<Types>[],
    unknown,
    unknown,
    Types['PrismaTypes'][Name]['Shape']
  >,
>(
  _: Name,
  obj: Obj,
) => obj;"#;

const OPERATION_TYPES: &str = r#"type PrismaModels = keyof Types['PrismaTypes'] | [keyof Types['PrismaTypes']];

type GeneralObject<OperationKind extends FieldKind> = FieldOptionsFromKind<
  Types,
  Types['Root'],
  TypeParam<Types>,
  boolean,
  InputFieldMap,
  OperationKind,
  Types,
  unknown
>;

type GeneralPrismaObject<OperationKind extends FieldKind> = {
  type: PrismaModels;
  nullable: boolean;
  args: InputFieldMap;
  resolve: PrismaFieldOptions<
    Types,
    Types['Root'],
    PrismaModels,
    PrismaModelTypes,
    PrismaModels extends [unknown]
      ? [ObjectRef<Types, PrismaModelTypes['Shape']>]
      : ObjectRef<Types, PrismaModelTypes['Shape']>,
    InputFieldMap,
    boolean,
    unknown,
    unknown,
    OperationKind
  >['resolve'];
};"#;

/// Helpers for one root kind (`Query` or `Mutation`).
fn operation_helpers(kind: &str) -> String {
    format!(
        r#"export type {kind}Object = GeneralObject<'{kind}'>;
export type {kind}PrismaObject = GeneralPrismaObject<'{kind}'>;

type {kind}FieldBuilder = PothosSchemaTypes.{kind}FieldBuilder<Types, Types['Root']>;

export const define{kind} = <T extends Record<string, unknown>>(func: (t: {kind}FieldBuilder) => T) => func;

export const define{kind}Function = <T>(func: (t: {kind}FieldBuilder) => T) => func;

export const define{kind}Object = <T extends {kind}Object>(obj: T) => obj;

export const define{kind}PrismaObject = <T extends {kind}PrismaObject>(obj: T) => obj;"#
    )
}

/// The shared `utils.ts` helper module.
pub struct UtilsTs<'a> {
    builder_import_path: &'a str,
}

impl<'a> UtilsTs<'a> {
    pub fn new(builder_import_path: &'a str) -> Self {
        Self {
            builder_import_path,
        }
    }
}

impl GeneratedFile for UtilsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils.ts")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new("@pothos/core").named_all(POTHOS_CORE_IMPORTS))
            .import(Import::new("@pothos/plugin-prisma").named_all(POTHOS_PRISMA_IMPORTS))
            .import(Import::new(self.builder_import_path).named("builder"))
            .add(RawCode::new(TYPES))
            .add(RawCode::new(OBJECT_HELPERS))
            .add(RawCode::new(OPERATION_TYPES))
            .add(RawCode::new(operation_helpers("Query")))
            .add(RawCode::new(operation_helpers("Mutation")))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utils_imports_builder() {
        let content = UtilsTs::new("@/graphql/builder").render();
        assert!(content.starts_with("import { FieldKind, FieldOptionsFromKind,"));
        assert!(content.contains("import { builder } from '@/graphql/builder';\n\ntype Types ="));
    }

    #[test]
    fn test_utils_declares_every_helper_resolvers_import() {
        let content = UtilsTs::new("./builder").render();
        for helper in [
            "definePrismaObject",
            "defineQuery",
            "defineQueryFunction",
            "defineQueryObject",
            "defineQueryPrismaObject",
            "defineMutation",
            "defineMutationFunction",
            "defineMutationObject",
            "defineMutationPrismaObject",
        ] {
            assert!(
                content.contains(&format!("export const {helper} = ")),
                "missing {helper}"
            );
        }
    }
}
