use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, always replacing previous content
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_file(&path, &self.render())
    }
}

/// Create parent directories, then write `content` to `path`.
///
/// Existing files are fully overwritten. A file whose content is already
/// identical is left untouched so repeated runs do not bump mtimes.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }

    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(WriteResult::Unchanged);
    }

    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::trace!(path = %path.display(), "wrote file");
    Ok(WriteResult::Written)
}

/// Recursively delete a directory. A missing directory is not an error.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to delete '{}'", path.display())),
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting(&'static str);

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("greetings").join("hello.ts")
        }

        fn render(&self) -> String {
            format!("export const greeting = \"{}\";\n", self.0)
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let result = write_file(&path, "hello").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        let result = write_file(&path, "second").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "same").unwrap();
        let result = write_file(&path, "same").unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_write_file_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_file(&blocker.join("child.txt"), "content");

        assert!(result.is_err());
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        Greeting("hi").write(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join("greetings/hello.ts")).unwrap();
        assert_eq!(content, "export const greeting = \"hi\";\n");
    }

    #[test]
    fn test_remove_dir_if_exists() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("generated");
        write_file(&dir.join("User/object.base.ts"), "x").unwrap();

        assert!(remove_dir_if_exists(&dir).unwrap());
        assert!(!dir.exists());
        assert!(!remove_dir_if_exists(&dir).unwrap());
    }
}
