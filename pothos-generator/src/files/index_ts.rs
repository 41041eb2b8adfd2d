//! Barrel files: `{Model}/index.ts` and `{Model}/{queries|mutations}/index.ts`.

use std::path::{Path, PathBuf};

use pothos_crud_codegen::plan::{ModelPlan, Operation, ResolverKind};
use pothos_crud_core::GeneratedFile;

use crate::{ast::Export, code_file::CodeFile};

/// Re-exports every surviving resolver of one kind.
pub struct KindIndexTs<'a> {
    model: &'a str,
    kind: ResolverKind,
    operations: &'a [Operation],
}

impl<'a> KindIndexTs<'a> {
    pub fn new(plan: &'a ModelPlan, kind: ResolverKind) -> Self {
        Self {
            model: &plan.name,
            kind,
            operations: plan.of_kind(kind),
        }
    }

    /// No index is written for a kind whose operations were all filtered out.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl GeneratedFile for KindIndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.model).join(self.kind.dir()).join("index.ts")
    }

    fn render(&self) -> String {
        let exports = self.operations.iter().map(|op| {
            let symbol = format!("{}{}", op.resolver_name(self.model), self.kind);
            Export::new()
                .from(format!("./{}.base", op.name()))
                .named(symbol.clone())
                .named(format!("{symbol}Object"))
        });
        CodeFile::new().exports(exports).render()
    }
}

/// `{Model}/index.ts`: the object plus whichever resolver indexes exist.
pub struct ModelIndexTs<'a> {
    plan: &'a ModelPlan,
}

impl<'a> ModelIndexTs<'a> {
    pub fn new(plan: &'a ModelPlan) -> Self {
        Self { plan }
    }
}

impl GeneratedFile for ModelIndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.plan.name).join("index.ts")
    }

    fn render(&self) -> String {
        let kinds = [ResolverKind::Query, ResolverKind::Mutation]
            .into_iter()
            .filter(|kind| !self.plan.of_kind(*kind).is_empty())
            .map(|kind| Export::new().from(format!("./{}", kind.dir())));

        CodeFile::new()
            .export(Export::new().from("./object.base"))
            .exports(kinds)
            .render()
    }
}
