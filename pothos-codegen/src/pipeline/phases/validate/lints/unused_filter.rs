//! Lint for exact resolver filters that match nothing.

use std::collections::HashSet;

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::super::Lint;
use crate::{pipeline::Diagnostic, plan::Operation};

/// Lint that warns on `includeResolversExact` / `excludeResolversExact`
/// entries naming no resolver. These are usually typos.
pub struct UnusedFilterLint;

impl Lint for UnusedFilterLint {
    fn name(&self) -> &'static str {
        "unused-filter"
    }

    fn description(&self) -> &'static str {
        "Warn about exact resolver filters that match no generated resolver"
    }

    fn check(&self, document: &Document, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        let candidates: HashSet<String> = document
            .models()
            .iter()
            .flat_map(|model| {
                Operation::ALL
                    .into_iter()
                    .map(move |op| op.resolver_name(&model.name))
            })
            .collect();

        let lists = [
            ("includeResolversExact", &config.crud.include_resolvers_exact),
            ("excludeResolversExact", &config.crud.exclude_resolvers_exact),
        ];
        for (key, entries) in lists {
            for entry in entries.iter().filter(|e| !candidates.contains(e.as_str())) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("'{}' in {} matches no resolver", entry, key),
                    )
                    .at(format!("crud.{}", key)),
                );
            }
        }
    }
}
