use crate::schema::InputFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of expanding the command-line inputs into definition files.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Discovery {
    /// JSON/YAML files to process, in command-line then file-name order.
    pub files: Vec<PathBuf>,
    /// Inputs that do not exist.
    pub missing: Vec<PathBuf>,
    /// Files skipped because of their extension.
    pub ignored: Vec<PathBuf>,
}

impl Discovery {
    fn accept(&mut self, path: PathBuf) {
        if InputFormat::from_path(&path).is_some() {
            self.files.push(path);
        } else {
            self.ignored.push(path);
        }
    }
}

/// Expand files and directories (recursively) into the definition files they contain.
pub fn discover(paths: &[PathBuf]) -> Discovery {
    let mut found = Discovery::default();
    for path in paths {
        if !path.exists() {
            found.missing.push(path.clone());
        } else if path.is_dir() {
            for file in walk_files(path) {
                found.accept(file);
            }
        } else {
            found.accept(path.clone());
        }
    }
    found
}

fn walk_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, rel: &str) -> PathBuf {
        let path = dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn walks_directories_recursively_in_name_order() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b.yaml");
        let a = touch(&dir, "a.json");
        let nested = touch(&dir, "nested/c.yml");
        let readme = touch(&dir, "README.md");

        let found = discover(&[dir.path().to_path_buf()]);
        assert_eq!(found.files, vec![a, b, nested]);
        assert_eq!(found.ignored, vec![readme]);
        assert!(found.missing.is_empty());
    }

    #[test]
    fn explicit_files_keep_argument_order() {
        let dir = TempDir::new().unwrap();
        let second = touch(&dir, "z.yaml");
        let first = touch(&dir, "a.yaml");

        let found = discover(&[second.clone(), first.clone()]);
        assert_eq!(found.files, vec![second, first]);
    }

    #[test]
    fn reports_missing_and_ignored_inputs() {
        let dir = TempDir::new().unwrap();
        let ts = touch(&dir, "post.actions.ts");
        let missing = dir.path().join("gone.yaml");

        let found = discover(&[missing.clone(), ts.clone()]);
        assert!(found.files.is_empty());
        assert_eq!(found.missing, vec![missing]);
        assert_eq!(found.ignored, vec![ts]);
    }
}
