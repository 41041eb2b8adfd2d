//! Pipeline snapshot plugin for `--visualize`.

use std::{
    fs,
    path::Path,
    sync::{PoisonError, RwLock},
};

use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::plan::CrudPlan;

/// Pipeline state right after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    /// Model names in schema order.
    pub models: Vec<String>,

    /// The CRUD plan (available after the "analyze" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<CrudPlan>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Snapshots are held in memory; [`SnapshotPlugin::write_to_dir`] writes
/// them out as `<dir>/<phase>.json`.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write every collected snapshot into `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.snapshots() {
            write_snapshot(dir.as_ref(), &snapshot)?;
        }
        Ok(())
    }

    fn capture_snapshot(&self, phase: &str, ctx: &CompilationContext) {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            models: ctx
                .document
                .models()
                .iter()
                .map(|m| m.name.clone())
                .collect(),
            plan: ctx.plan.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote pipeline snapshot");
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        self.capture_snapshot(phase, ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pothos_crud_config::Config;
    use pothos_crud_schema::testing::user_document;

    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_captures_each_phase() {
        let plugin = Arc::new(SnapshotPlugin::new());
        Pipeline::new()
            .plugin(Arc::clone(&plugin))
            .run(user_document(), Config::default())
            .unwrap();

        let snapshots = plugin.snapshots();
        let phases: Vec<_> = snapshots.iter().map(|s| s.phase.as_str()).collect();
        assert_eq!(phases, vec!["validate", "analyze"]);
        assert!(snapshots[0].plan.is_none());
        assert_eq!(snapshots[1].plan.as_ref().unwrap().resolver_count(), 11);
        assert_eq!(snapshots[1].models, vec!["User"]);
    }

    #[test]
    fn test_writes_json_per_phase() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("debug");
        let plugin = Arc::new(SnapshotPlugin::new());
        Pipeline::new()
            .plugin(Arc::clone(&plugin))
            .run(user_document(), Config::default())
            .unwrap();
        plugin.write_to_dir(&dir).unwrap();

        let analyze = fs::read_to_string(dir.join("analyze.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&analyze).unwrap();
        assert_eq!(value["phase"], "analyze");
        assert_eq!(value["plan"]["records"][0]["resolver_name"], "findFirstUser");
        assert!(dir.join("validate.json").exists());
    }
}
