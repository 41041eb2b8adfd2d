//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{collections::BTreeMap, path::Path};

use eyre::{Result, WrapErr};

/// Generate into a temporary directory and return it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Read every file under `root` into a map keyed by `/`-separated relative path.
pub fn read_tree(root: &Path) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();
    collect(root, root, &mut files)?;
    Ok(files)
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) -> Result<()> {
    for entry in std::fs::read_dir(dir).wrap_err_with(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect(root, &path, files)?;
        } else {
            let relative = path
                .strip_prefix(root)?
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.insert(relative, std::fs::read_to_string(&path)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tree() {
        let temp = generate_to_temp(|dir| {
            std::fs::create_dir_all(dir.join("User/queries"))?;
            std::fs::write(dir.join("utils.ts"), "u")?;
            std::fs::write(dir.join("User/queries/index.ts"), "q")?;
            Ok(())
        })
        .unwrap();

        let tree = read_tree(temp.path()).unwrap();
        assert_eq!(
            tree.keys().collect::<Vec<_>>(),
            vec!["User/queries/index.ts", "utils.ts"]
        );
        assert_eq!(tree["utils.ts"], "u");
    }
}
