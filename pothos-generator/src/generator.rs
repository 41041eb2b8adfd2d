//! Pothos CRUD code generator.

use std::path::Path;

use eyre::Result;
use pothos_crud_codegen::{
    generation::{FileCategory, FileEntry, FileRegistry},
    language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    plan::CrudPlan,
};
use pothos_crud_config::Config;
use pothos_crud_core::remove_dir_if_exists;
use pothos_crud_schema::Document;

use crate::{
    emitter::emit_models,
    files::{AutocrudTs, InputsTs, ObjectsTs, UtilsTs},
};

/// Generates Pothos objects, CRUD resolvers and inputs from a Prisma schema.
pub struct Generator<'a> {
    document: &'a Document,
    config: &'a Config,
    plan: &'a CrudPlan,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.registry()
            .preview()
            .into_iter()
            .map(|entry| PreviewFile {
                path: entry.path,
                content: entry.content,
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let registry = self.registry();

        let deleted_output_dir = self.config.global.delete_output_dir_before_generate
            && remove_dir_if_exists(output_dir)?;
        if deleted_output_dir {
            tracing::info!(path = %output_dir.display(), "deleted output directory");
        }

        let stats = registry.write_all(output_dir);
        tracing::info!(
            written = stats.written,
            unchanged = stats.unchanged,
            failed = stats.failed.len(),
            resolvers = self.plan.resolver_count(),
            "generated files"
        );

        Ok(GenerateResult {
            deleted_output_dir,
            stats,
        })
    }

    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        let removed = remove_dir_if_exists(output_dir)?;
        Ok(CleanResult {
            path: output_dir.to_path_buf(),
            removed,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(document: &'a Document, config: &'a Config, plan: &'a CrudPlan) -> Self {
        Self {
            document,
            config,
            plan,
        }
    }

    /// Build a generator from a context the pipeline has analyzed.
    pub fn from_context(ctx: &'a CompilationContext) -> Result<Self> {
        Ok(Self::new(&ctx.document, &ctx.config, ctx.plan()?))
    }

    /// Register every file this run produces.
    fn registry(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();

        if self.config.crud.disabled {
            tracing::debug!("crud generation disabled");
        } else {
            registry.register_all(emit_models(self.document, self.plan, self.config));

            let model_names = self.plan.models.iter().map(|m| m.name.as_str()).collect();
            registry.register(FileEntry::from_generated(
                &UtilsTs::new(&self.config.global.builder_import_path),
                FileCategory::Root,
            ));
            registry.register(FileEntry::from_generated(
                &ObjectsTs::new(model_names, self.config),
                FileCategory::Root,
            ));
            if self.config.crud.generate_autocrud {
                registry.register(FileEntry::from_generated(
                    &AutocrudTs::new(self.plan, self.config),
                    FileCategory::Root,
                ));
            }
        }

        if self.config.inputs.disabled {
            tracing::debug!("inputs generation disabled");
        } else {
            registry.register(FileEntry::from_generated(
                &InputsTs::new(self.document, self.config),
                FileCategory::Inputs,
            ));
        }

        registry
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_schema::testing::user_document;

    use super::*;

    fn preview_paths(config: &Config) -> Vec<String> {
        let document = user_document();
        let plan = CrudPlan::build(&document, &config.crud);
        Generator::new(&document, config, &plan)
            .preview()
            .into_iter()
            .map(|f| f.path)
            .collect()
    }

    #[test]
    fn test_preview_orders_model_root_inputs() {
        let paths = preview_paths(&Config::default());
        assert_eq!(paths.first().map(String::as_str), Some("User/object.base.ts"));
        let tail: Vec<&str> = paths[paths.len() - 4..].iter().map(String::as_str).collect();
        assert_eq!(tail, vec!["utils.ts", "objects.ts", "autocrud.ts", "inputs.ts"]);
        // object + 11 resolvers + 2 kind indexes + model index + 4 root files
        assert_eq!(paths.len(), 19);
    }

    #[test]
    fn test_disabled_passes() {
        let mut config = Config::default();
        config.crud.generate_autocrud = false;
        config.inputs.disabled = true;
        let paths = preview_paths(&config);
        assert!(!paths.iter().any(|p| p == "autocrud.ts" || p == "inputs.ts"));

        config.crud.disabled = true;
        assert!(preview_paths(&config).is_empty());
    }
}
