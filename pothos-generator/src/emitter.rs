//! Per-model emission.
//!
//! Each model owns a disjoint subtree of the output (`{Model}/...`), so
//! models are rendered concurrently. Results are collected back in schema
//! order to keep output and reports deterministic.

use pothos_crud_codegen::{
    generation::{FileCategory, FileEntry},
    plan::{CrudPlan, ModelPlan, ResolverKind},
};
use pothos_crud_config::Config;
use pothos_crud_schema::{Document, Model};

use crate::{
    files::{KindIndexTs, ModelIndexTs, ObjectTs, ResolverTs},
    resolver::ResolverArtifact,
};

/// Renders the object, resolver and index files of one model.
pub struct ModelEmitter<'a> {
    model: &'a Model,
    plan: &'a ModelPlan,
    config: &'a Config,
}

impl<'a> ModelEmitter<'a> {
    pub fn new(model: &'a Model, plan: &'a ModelPlan, config: &'a Config) -> Self {
        Self {
            model,
            plan,
            config,
        }
    }

    pub fn emit(&self) -> Vec<FileEntry> {
        let mut files = vec![FileEntry::from_generated(
            &ObjectTs::new(self.model, &self.config.crud),
            FileCategory::Model,
        )];

        for operation in self.plan.operations() {
            let artifact = ResolverArtifact::build(&self.model.name, operation, &self.config.crud);
            files.push(FileEntry::from_generated(
                &ResolverTs::new(artifact, self.config),
                FileCategory::Model,
            ));
        }

        for kind in [ResolverKind::Query, ResolverKind::Mutation] {
            let index = KindIndexTs::new(self.plan, kind);
            if !index.is_empty() {
                files.push(FileEntry::from_generated(&index, FileCategory::Model));
            }
        }
        files.push(FileEntry::from_generated(
            &ModelIndexTs::new(self.plan),
            FileCategory::Model,
        ));

        tracing::debug!(model = %self.model.name, files = files.len(), "emitted model");
        files
    }
}

/// Emit every planned model on its own scoped thread.
pub fn emit_models(document: &Document, plan: &CrudPlan, config: &Config) -> Vec<FileEntry> {
    let emitters: Vec<ModelEmitter<'_>> = plan
        .models
        .iter()
        .filter_map(|model_plan| {
            document
                .model(&model_plan.name)
                .map(|model| ModelEmitter::new(model, model_plan, config))
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = emitters
            .iter()
            .map(|emitter| scope.spawn(move || emitter.emit()))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(files) => files,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use pothos_crud_codegen::plan::Operation;
    use pothos_crud_config::CrudConfig;
    use pothos_crud_schema::testing::{blog_document, user_document};

    use super::*;

    fn paths(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_model_files() {
        let document = user_document();
        let config = Config {
            crud: CrudConfig {
                include_resolvers_exact: vec!["findManyUser".into(), "countUser".into()],
                ..CrudConfig::default()
            },
            ..Config::default()
        };
        let plan = CrudPlan::build(&document, &config.crud);
        let files = emit_models(&document, &plan, &config);

        assert_eq!(
            paths(&files),
            vec![
                "User/object.base.ts",
                "User/queries/findMany.base.ts",
                "User/queries/count.base.ts",
                "User/queries/index.ts",
                "User/index.ts",
            ]
        );
    }

    #[test]
    fn test_every_operation_gets_one_file() {
        let document = blog_document();
        let config = Config::default();
        let plan = CrudPlan::build(&document, &config.crud);
        let files = emit_models(&document, &plan, &config);

        for model in ["User", "Post"] {
            for op in Operation::ALL {
                let path = format!("{model}/{}/{}.base.ts", op.kind().dir(), op.name());
                assert_eq!(
                    files.iter().filter(|f| f.path == path).count(),
                    1,
                    "{path}"
                );
            }
        }
        // models come back in schema order
        assert!(files[0].path.starts_with("User/"));
        assert!(files.last().unwrap().path.starts_with("Post/"));
    }
}
