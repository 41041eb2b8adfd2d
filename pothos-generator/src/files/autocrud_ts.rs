//! `autocrud.ts`: registers generated objects and resolvers at runtime.
//!
//! The file holds a statically generated list of per-model descriptors.
//! `createCrudTable` turns that list into an explicit table which every
//! `generateAll*` entry point takes as a parameter, so there is no module
//! level registry.

use std::path::{Path, PathBuf};

use pothos_crud_codegen::plan::{CrudPlan, ModelPlan, Operation, ResolverKind};
use pothos_crud_config::Config;
use pothos_crud_core::GeneratedFile;

use crate::{
    ast::{Const, Fn, Import, JsArray, JsObject, Param, single_quote},
    code_file::{CodeFile, RawCode},
};

const TYPES: &str = r#"type Model = Objects.Model;
type ResolverType = 'Query' | 'Mutation';
type OperationMap = Partial<Record<Model | '$all', string[]>>;
type FieldDefiner = (t: any) => any;

export type CrudOptions = {
  include?: Model[];
  exclude?: Model[];
  includeOperation?: OperationMap;
  excludeOperation?: OperationMap;
  /**
   * Caution: this is not type safe.
   * Rewrites a resolver's field options right before it is registered
   * (override args, wrap resolve, apply plugins).
   */
  handleResolver?: (props: {
    modelName: Model;
    field: any;
    operationName: string;
    resolverName: string;
    t: any;
    isPrismaField: boolean;
    type: ResolverType;
  }) => any;
};

export type CrudDescriptor = {
  modelName: Model;
  object: any;
  queries: Record<string, FieldDefiner>;
  mutations: Record<string, FieldDefiner>;
};

export type CrudTable = Map<Model, CrudDescriptor>;"#;

const FILTERS: &str = r#"const includeModel = (modelName: Model, opts?: CrudOptions): boolean => {
  if (opts?.include) return opts.include.includes(modelName);
  if (opts?.exclude) return !opts.exclude.includes(modelName);
  return true;
};

const listedOperations = (modelName: Model, map: OperationMap): string[] => [
  ...(map.$all ?? []),
  ...(map[modelName] ?? []),
];

const includeOperation = (modelName: Model, operationName: string, opts?: CrudOptions): boolean => {
  if (opts?.includeOperation) return listedOperations(modelName, opts.includeOperation).includes(operationName);
  if (opts?.excludeOperation) return !listedOperations(modelName, opts.excludeOperation).includes(operationName);
  return true;
};"#;

const REGISTER_RESOLVERS: &str = r#"function generateResolversByType(type: ResolverType, opts: CrudOptions | undefined, table: CrudTable) {
  for (const [modelName, descriptor] of table) {
    if (!includeModel(modelName, opts)) continue;
    const resolvers = type === 'Query' ? descriptor.queries : descriptor.mutations;

    for (const [operationName, defineField] of Object.entries(resolvers)) {
      if (!includeOperation(modelName, operationName, opts)) continue;
      const resolverName = operationName + modelName;
      const isPrismaField = !batchOperations.includes(operationName);

      const getFields = (t: any) => {
        const field = defineField(t);
        const handledField = opts?.handleResolver
          ? opts.handleResolver({ field, modelName, operationName, resolverName, t, isPrismaField, type })
          : field;
        return {
          [resolverName]: isPrismaField ? t.prismaField(handledField) : t.field(handledField),
        };
      };

      if (type === 'Query') builder.queryFields(getFields);
      else builder.mutationFields(getFields);
    }
  }
}"#;

/// The `autocrud.ts` orchestration module.
pub struct AutocrudTs<'a> {
    plan: &'a CrudPlan,
    config: &'a Config,
}

impl<'a> AutocrudTs<'a> {
    pub fn new(plan: &'a CrudPlan, config: &'a Config) -> Self {
        Self { plan, config }
    }

    fn resolver_map(model: &ModelPlan, kind: ResolverKind) -> JsObject {
        model.of_kind(kind).iter().fold(JsObject::new(), |obj, op| {
            obj.raw(
                op.name(),
                format!("{}.{}{kind}Object", model.name, op.resolver_name(&model.name)),
            )
        })
    }

    fn descriptor(model: &ModelPlan) -> JsObject {
        JsObject::new()
            .raw("modelName", single_quote(&model.name))
            .raw("object", format!("{0}.{0}Object", model.name))
            .object("queries", Self::resolver_map(model, ResolverKind::Query))
            .object("mutations", Self::resolver_map(model, ResolverKind::Mutation))
    }

    fn descriptors(&self) -> Const {
        let value = if self.plan.models.is_empty() {
            "[]".to_string()
        } else {
            let body = self
                .plan
                .models
                .iter()
                .map(|model| indent(&format!("{},", Self::descriptor(model).build())))
                .collect::<Vec<_>>()
                .join("\n");
            format!("[\n{body}\n]")
        };
        Const::new("crudDescriptors", value).ty("CrudDescriptor[]")
    }

    fn batch_operations() -> Const {
        let names = Operation::ALL
            .into_iter()
            .filter(Operation::is_batch)
            .map(|op| op.name());
        Const::new("batchOperations", JsArray::from_strings(names).build())
            .ty("string[]")
            .private()
    }

    fn entry_points() -> Vec<Fn> {
        let entry = |name: &str, body: &str| {
            Fn::new(name)
                .param(Param::new("opts", "CrudOptions").optional())
                .param(Param::untyped("table").default("createCrudTable()"))
                .body(body)
        };

        vec![
            entry(
                "generateAllObjects",
                "for (const [modelName, descriptor] of table) {\n  if (includeModel(modelName, opts)) builder.prismaObject(modelName, descriptor.object);\n}",
            ),
            entry(
                "generateAllQueries",
                "generateResolversByType('Query', opts, table);",
            ),
            entry(
                "generateAllMutations",
                "generateResolversByType('Mutation', opts, table);",
            ),
            entry(
                "generateAllResolvers",
                "generateResolversByType('Query', opts, table);\ngenerateResolversByType('Mutation', opts, table);",
            ),
            entry(
                "generateAllCrud",
                "generateAllObjects(opts, table);\ngenerateAllResolvers(opts, table);",
            ),
        ]
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl GeneratedFile for AutocrudTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("autocrud.ts")
    }

    fn render(&self) -> String {
        let model_imports = self
            .plan
            .models
            .iter()
            .map(|m| Import::new(format!("./{}", m.name)).namespace(&m.name));

        let create_table = Fn::new("createCrudTable")
            .param(Param::untyped("descriptors").default("crudDescriptors"))
            .returns("CrudTable")
            .body("return new Map(descriptors.map((descriptor) => [descriptor.modelName, descriptor]));");

        CodeFile::new()
            .imports(model_imports)
            .import(Import::new(&self.config.global.builder_import_path).named("builder"))
            .import(Import::new("./objects").namespace("Objects"))
            .add(RawCode::new(TYPES))
            .add(self.descriptors())
            .add(create_table)
            .add(Self::batch_operations())
            .add(RawCode::new(FILTERS))
            .add(RawCode::new(REGISTER_RESOLVERS))
            .add_all(Self::entry_points())
            .render()
    }
}
