//! Check operation - schema and config validation.

use std::path::Path;

use eyre::Result;
use pothos_crud_codegen::{
    pipeline::{
        CompilationContext, Phase, Severity,
        phases::{AnalyzePhase, ValidatePhase},
    },
    plan::ResolverKind,
};
use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use crate::reports::{CheckReport, ModelSummary};

/// Execute the check operation.
///
/// Runs the phases directly rather than through the pipeline so every
/// diagnostic is reported, including the errors that stop validation.
pub fn check(document: Document, config: Config, config_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(document, config);

    let validate = ValidatePhase::new();
    if let Err(e) = validate.run(&mut ctx) {
        tracing::debug!(error = %e, "validation stopped");
    }
    if !ctx.has_errors() {
        AnalyzePhase.run(&mut ctx)?;
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let models = ctx
        .plan
        .as_ref()
        .map(|plan| {
            plan.models
                .iter()
                .map(|m| ModelSummary {
                    name: m.name.clone(),
                    queries: m.of_kind(ResolverKind::Query).len(),
                    mutations: m.of_kind(ResolverKind::Mutation).len(),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        models,
    })
}
