//! Analyze phase - builds the CRUD plan.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    plan::CrudPlan,
};

/// Phase that decides which resolvers each model gets.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Apply resolver filters and build the CRUD plan"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let plan = CrudPlan::build(&ctx.document, &ctx.config.crud);

        let skipped = ctx.document.models().len() * crate::plan::Operation::ALL.len()
            - plan.resolver_count();
        if skipped > 0 {
            ctx.add_info(
                self.name(),
                format!("{} resolver(s) filtered out by include/exclude rules", skipped),
            );
        }
        for model in plan.models.iter().filter(|m| m.is_empty()) {
            ctx.add_info(
                self.name(),
                format!("model '{}' has no resolvers after filtering", model.name),
            );
        }

        ctx.plan = Some(plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pothos_crud_config::{Config, CrudConfig};
    use pothos_crud_schema::testing::blog_document;

    use super::*;

    #[test]
    fn test_analyze_phase() {
        let mut ctx = CompilationContext::new(blog_document(), Config::default());
        assert!(ctx.plan.is_none());

        AnalyzePhase.run(&mut ctx).expect("analyze should succeed");

        assert_eq!(ctx.plan().unwrap().resolver_count(), 22);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_analyze_reports_filtered_models() {
        let config = Config {
            crud: CrudConfig {
                include_resolvers_contain: vec!["Post".into()],
                ..CrudConfig::default()
            },
            ..Config::default()
        };
        let mut ctx = CompilationContext::new(blog_document(), config);

        AnalyzePhase.run(&mut ctx).unwrap();

        let messages: Vec<_> = ctx.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "11 resolver(s) filtered out by include/exclude rules",
                "model 'User' has no resolvers after filtering",
            ]
        );
    }
}
