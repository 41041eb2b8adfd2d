//! `{Model}/{queries|mutations}/{operation}.base.ts` generator.

use std::path::{Path, PathBuf};

use pothos_crud_config::Config;
use pothos_crud_core::GeneratedFile;

use crate::{
    ast::{ArrowFn, Const, Import, JsArray, JsObject},
    code_file::CodeFile,
    resolver::{ArgSpec, ArgType, OutputType, ResolveBody, ResolverArtifact},
};

/// One resolver file: its args, its field object and its field definer.
pub struct ResolverTs<'a> {
    artifact: ResolverArtifact,
    config: &'a Config,
}

impl<'a> ResolverTs<'a> {
    pub fn new(artifact: ResolverArtifact, config: &'a Config) -> Self {
        Self { artifact, config }
    }

    pub fn artifact(&self) -> &ResolverArtifact {
        &self.artifact
    }

    fn kind(&self) -> &'static str {
        self.artifact.kind().as_str()
    }

    /// Helpers imported from `utils.ts`.
    fn helper_names(&self) -> [String; 3] {
        let kind = self.kind();
        let object = if self.artifact.operation.is_projecting() {
            format!("define{kind}PrismaObject")
        } else {
            format!("define{kind}Object")
        };
        [
            format!("define{kind}"),
            format!("define{kind}Function"),
            object,
        ]
    }

    fn args_declaration(&self) -> Const {
        let fields = self
            .artifact
            .args
            .iter()
            .fold(JsObject::new(), |obj, arg| obj.raw(arg.name, arg_field(arg)));

        Const::new(
            self.artifact.args_name(),
            format!(
                "builder.args({})",
                ArrowFn::new("t").returns_object(fields).build()
            ),
        )
    }

    fn output_type(&self) -> String {
        let model = &self.artifact.model;
        match self.artifact.output {
            OutputType::Model => crate::ast::quote(model),
            OutputType::ModelList => JsArray::new().string(model).build(),
            OutputType::Int => crate::ast::quote("Int"),
            OutputType::BatchPayload => "BatchPayload".to_string(),
        }
    }

    fn resolve_fn(&self) -> ArrowFn {
        let params = if !self.artifact.operation.is_projecting() {
            "_root, args, context, _info"
        } else if self.uses_query() {
            "query, _root, args, context, _info"
        } else {
            "_query, _root, args, context, _info"
        };

        let caller = &self.config.crud.prisma_caller;
        let delegate = self.artifact.delegate(caller);
        let call = match &self.artifact.body {
            ResolveBody::Call {
                method,
                params,
                spread_query,
            } => {
                let arg = params
                    .iter()
                    .fold(JsObject::new(), |obj, (key, value)| obj.raw(*key, *value))
                    .spread_if(*spread_query, "query");
                format!("await {delegate}.{method}({})", arg.build())
            }
            ResolveBody::TransactionCreate => format!(
                "await {caller}.$transaction(\n  args.data.map((data) => {delegate}.create({})),\n)",
                JsObject::new().shorthand("data").spread("query").build_inline()
            ),
        };

        ArrowFn::new(params).async_().expr_below(call)
    }

    fn uses_query(&self) -> bool {
        match &self.artifact.body {
            ResolveBody::Call {
                params,
                spread_query,
                ..
            } => *spread_query || params.iter().any(|(_, v)| v.starts_with("query.")),
            ResolveBody::TransactionCreate => true,
        }
    }

    fn object_declaration(&self) -> Const {
        let [_, function_helper, object_helper] = self.helper_names();

        let options = JsObject::new()
            .raw("type", self.output_type())
            .bool("nullable", self.artifact.nullable)
            .raw("args", self.artifact.args_name())
            .arrow_fn("resolve", self.resolve_fn());

        let definer = ArrowFn::new("t").expr_below(format!("{object_helper}({})", options.build()));
        Const::new(
            self.artifact.object_name(),
            format!("{function_helper}({})", definer.build()),
        )
    }

    fn field_declaration(&self) -> Const {
        let [define_helper, ..] = self.helper_names();
        let wrapper = if self.artifact.operation.is_projecting() {
            "prismaField"
        } else {
            "field"
        };

        let fields = JsObject::new().raw(
            self.artifact.field_name(),
            format!("t.{wrapper}({}(t))", self.artifact.object_name()),
        );
        Const::new(
            self.artifact.export_name(),
            format!(
                "{define_helper}({})",
                ArrowFn::new("t").returns_object(fields).build()
            ),
        )
    }
}

/// `t.field({ type: Inputs.X, required: true })`
fn arg_field(arg: &ArgSpec) -> String {
    let ty = match &arg.ty {
        ArgType::Input { name, list: false } => format!("Inputs.{name}"),
        ArgType::Input { name, list: true } => JsArray::new().raw(format!("Inputs.{name}")).build(),
        ArgType::Scalar(scalar) => crate::ast::quote(scalar),
    };
    let options = JsObject::new().raw("type", ty).bool("required", arg.required);
    format!("t.field({})", options.build_inline())
}

impl GeneratedFile for ResolverTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        let operation = self.artifact.operation;
        base.join(&self.artifact.model)
            .join(operation.kind().dir())
            .join(format!("{}.base.ts", operation.name()))
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new()
            .verbatim_import(&self.config.crud.inputs_importer)
            .import(Import::new(&self.config.global.builder_import_path).named("builder"))
            .import(Import::new("../../utils").named_all(self.helper_names()));
        if self.artifact.output == OutputType::BatchPayload {
            file = file.import(Import::new("../../objects").named("BatchPayload"));
        }

        file.verbatim_import(&self.config.crud.resolver_imports)
            .add(self.args_declaration())
            .add(self.object_declaration())
            .add(self.field_declaration())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_codegen::plan::Operation;
    use pothos_crud_config::CreateManyMode;

    use super::*;

    fn render(op: Operation, config: &Config) -> String {
        ResolverTs::new(ResolverArtifact::build("User", op, &config.crud), config).render()
    }

    #[test]
    fn test_path() {
        let config = Config::default();
        let file = ResolverTs::new(
            ResolverArtifact::build("User", Operation::DeleteOne, &config.crud),
            &config,
        );
        assert_eq!(
            file.path(Path::new("gen")),
            PathBuf::from("gen/User/mutations/deleteOne.base.ts")
        );
    }

    #[test]
    fn test_find_first_query() {
        let config = Config::default();
        insta::assert_snapshot!(render(Operation::FindFirst, &config), @r#"
        import * as Inputs from '../../inputs';
        import { builder } from './builder';
        import { defineQuery, defineQueryFunction, defineQueryPrismaObject } from '../../utils';

        export const findFirstUserQueryArgs = builder.args((t) => ({
          where: t.field({ type: Inputs.UserWhereInput, required: false }),
          orderBy: t.field({ type: [Inputs.UserOrderByWithRelationInput], required: false }),
          cursor: t.field({ type: Inputs.UserWhereUniqueInput, required: false }),
          take: t.field({ type: "Int", required: false }),
          skip: t.field({ type: "Int", required: false }),
          distinct: t.field({ type: [Inputs.UserScalarFieldEnum], required: false }),
        }));

        export const findFirstUserQueryObject = defineQueryFunction((t) =>
          defineQueryPrismaObject({
            type: "User",
            nullable: true,
            args: findFirstUserQueryArgs,
            resolve: async (query, _root, args, context, _info) =>
              await context.prisma.user.findFirst({
                where: args.where || undefined,
                cursor: args.cursor || undefined,
                take: args.take || undefined,
                skip: args.skip || undefined,
                orderBy: args.orderBy || undefined,
                distinct: args.distinct || undefined,
                ...query,
              }),
          }));

        export const findFirstUserQuery = defineQuery((t) => ({
          findFirstUser: t.prismaField(findFirstUserQueryObject(t)),
        }));
        "#);
    }

    #[test]
    fn test_update_many_mutation() {
        let config = Config::default();
        insta::assert_snapshot!(render(Operation::UpdateMany, &config), @r#"
        import * as Inputs from '../../inputs';
        import { builder } from './builder';
        import { defineMutation, defineMutationFunction, defineMutationObject } from '../../utils';
        import { BatchPayload } from '../../objects';

        export const updateManyUserMutationArgs = builder.args((t) => ({
          where: t.field({ type: Inputs.UserWhereInput, required: false }),
          data: t.field({ type: Inputs.UserUpdateManyMutationInput, required: true }),
        }));

        export const updateManyUserMutationObject = defineMutationFunction((t) =>
          defineMutationObject({
            type: BatchPayload,
            nullable: false,
            args: updateManyUserMutationArgs,
            resolve: async (_root, args, context, _info) =>
              await context.prisma.user.updateMany({
                where: args.where || undefined,
                data: args.data,
              }),
          }));

        export const updateManyUserMutation = defineMutation((t) => ({
          updateManyUser: t.field(updateManyUserMutationObject(t)),
        }));
        "#);
    }

    #[test]
    fn test_count_ignores_query() {
        let content = render(Operation::Count, &Config::default());
        assert!(content.contains("type: \"Int\","));
        assert!(content.contains("resolve: async (_query, _root, args, context, _info) =>"));
        assert!(content.contains("countUser: t.prismaField(countUserQueryObject(t)),"));
        assert!(!content.contains("distinct"));
        assert!(!content.contains("...query"));
    }

    #[test]
    fn test_create_many_bulk_and_transaction() {
        let mut config = Config::default();
        let bulk = render(Operation::CreateMany, &config);
        assert!(bulk.contains("type: [\"User\"],"));
        assert!(bulk.contains("await context.prisma.user.createManyAndReturn({"));
        assert!(bulk.contains("select: query.select,"));

        config.crud.create_many_mode = CreateManyMode::Transaction;
        let transaction = render(Operation::CreateMany, &config);
        assert!(transaction.contains(
            "await context.prisma.$transaction(\n        args.data.map((data) => context.prisma.user.create({ data, ...query })),\n      ),"
        ));
    }

    #[test]
    fn test_custom_caller_and_imports() {
        let mut config = Config::default();
        config.crud.prisma_caller = "ctx.db".into();
        config.crud.resolver_imports = "import { audit } from '@/audit';".into();
        config.global.builder_import_path = "@/graphql/builder".into();

        let content = render(Operation::DeleteOne, &config);
        assert!(content.contains("import { builder } from '@/graphql/builder';\n"));
        assert!(content.contains("import { audit } from '@/audit';\n\nexport const"));
        assert!(content.contains("await ctx.db.user.delete({"));
    }
}
