//! File registration for declarative code generation.
//!
//! Emitters register every file they produce; the registry then either
//! previews them or writes them all. Writes are independent: a failure is
//! logged with its destination and recorded, and the remaining files are
//! still written.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::model("User/object.base.ts", object.render()));
//! registry.register(FileEntry::root("objects.ts", objects.render()));
//!
//! let stats = registry.write_all(&output_dir);
//! ```

use std::path::{Path, PathBuf};

use pothos_crud_core::{GeneratedFile, WriteResult, write_file};

/// Category of generated file, determining output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Files under a model directory (object, resolvers, indexes).
    Model,
    /// `utils.ts`, `objects.ts` and `autocrud.ts`.
    Root,
    /// `inputs.ts`.
    Inputs,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Model => "model",
            FileCategory::Root => "root",
            FileCategory::Inputs => "inputs",
        }
    }
}

/// A file to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    pub fn model(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Model)
    }

    pub fn root(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Root)
    }

    pub fn inputs(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Inputs)
    }

    /// Render a [`GeneratedFile`], taking its path relative to the output root.
    pub fn from_generated<F: GeneratedFile>(file: &F, category: FileCategory) -> Self {
        let relative = file.path(Path::new(""));
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(path, file.render(), category)
    }

    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }
}

/// Registry for collecting generated files.
///
/// Iteration is in category order (Model -> Root -> Inputs), keeping
/// registration order within a category.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// All entries, sorted by category.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Write every file under `base`.
    ///
    /// Never fails as a whole: each failed write is logged and collected in
    /// [`WriteStats::failed`].
    pub fn write_all(&self, base: &Path) -> WriteStats {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            let path = entry.full_path(base);
            match write_file(&path, &entry.content) {
                Ok(WriteResult::Written) => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                Ok(WriteResult::Unchanged) => {
                    stats.unchanged += 1;
                }
                Err(error) => {
                    tracing::error!(path = %path.display(), error = %format!("{error:#}"), "failed to write generated file");
                    stats.failed.push(FailedWrite {
                        path: entry.path.clone(),
                        error: format!("{error:#}"),
                    });
                }
            }
        }

        stats
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

/// A write that failed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedWrite {
    pub path: String,
    pub error: String,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Files whose content changed (or that did not exist).
    pub written: usize,
    /// Files that already held identical content.
    pub unchanged: usize,
    pub written_paths: Vec<String>,
    pub failed: Vec<FailedWrite>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written + self.unchanged + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct IndexFile;

    impl GeneratedFile for IndexFile {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("User").join("queries").join("index.ts")
        }

        fn render(&self) -> String {
            "export {};\n".into()
        }
    }

    #[test]
    fn test_from_generated_uses_relative_path() {
        let entry = FileEntry::from_generated(&IndexFile, FileCategory::Model);
        assert_eq!(entry.path, "User/queries/index.ts");
        assert_eq!(entry.content, "export {};\n");
    }

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::inputs("inputs.ts", ""));
        registry.register(FileEntry::root("utils.ts", ""));
        registry.register(FileEntry::model("User/object.base.ts", ""));
        registry.register(FileEntry::root("objects.ts", ""));
        registry.register(FileEntry::model("Post/object.base.ts", ""));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "User/object.base.ts",
                "Post/object.base.ts",
                "utils.ts",
                "objects.ts",
                "inputs.ts"
            ]
        );
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::root("utils.ts", "content"));
        registry.register(FileEntry::model("User/index.ts", "export {};"));

        let stats = registry.write_all(temp.path());

        assert_eq!(stats.written, 2);
        assert!(!stats.has_failures());
        assert!(temp.path().join("utils.ts").exists());
        assert!(temp.path().join("User/index.ts").exists());
    }

    #[test]
    fn test_second_write_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::root("objects.ts", "export {};"));

        registry.write_all(temp.path());
        let stats = registry.write_all(temp.path());

        assert_eq!(stats.written, 0);
        assert_eq!(stats.unchanged, 1);
    }

    #[test]
    fn test_failed_write_does_not_abort_siblings() {
        let temp = TempDir::new().unwrap();
        // A file where a directory is needed makes that one write fail
        std::fs::write(temp.path().join("User"), "not a dir").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::model("User/object.base.ts", "a"));
        registry.register(FileEntry::model("Post/object.base.ts", "b"));
        registry.register(FileEntry::root("utils.ts", "c"));

        let stats = registry.write_all(temp.path());

        assert_eq!(stats.failed.len(), 1);
        assert_eq!(stats.failed[0].path, "User/object.base.ts");
        assert_eq!(stats.written, 2);
        assert_eq!(stats.total(), 3);
        assert!(temp.path().join("Post/object.base.ts").exists());
        assert!(temp.path().join("utils.ts").exists());
    }

    #[test]
    fn test_preview() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::root("a.ts", "content a"));
        registry.register(FileEntry::model("M/b.ts", "content b"));

        let preview = registry.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, "M/b.ts");
        assert_eq!(preview[1].path, "a.ts");
    }
}
